//! Backend Error Module
//!
//! This module defines the error type returned by every HTTP handler and
//! its conversion into a response.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - ApiError and status mapping
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! Handlers return `Result<_, ApiError>` and use `?`; auth, ownership and
//! not-found conditions are expected outcomes, while store failures and
//! timeouts are logged once in `conversion` and returned as a structured 500.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
