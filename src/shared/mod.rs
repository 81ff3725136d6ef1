//! Shared Module
//!
//! Types that describe the HTTP surface of the service. They carry no
//! server-only dependencies so a client crate can reuse them for
//! serialization.

/// Kitten request and response bodies
pub mod kitten;

/// Re-export commonly used types for convenience
pub use kitten::{KittenView, NewKitten};
