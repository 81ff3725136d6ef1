//! Cyber Kittens - Main Library
//!
//! A small HTTP service where registered users keep track of their kittens.
//! Users register or log in to receive a bearer token; every kitten
//! endpoint requires that token and only ever exposes kittens owned by the
//! caller.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types for the HTTP API (no server dependencies)
//! - **`backend`** - Axum server, authentication, persistence (`ssr` feature)
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the backend module and the server binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use cyber_kittens::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
