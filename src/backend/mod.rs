//! Backend Module
//!
//! All server-side code for Cyber Kittens: an Axum HTTP server backed by
//! SQLite, with bearer-token authentication in front of the kitten routes.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - Route configuration and router assembly
//! - **`auth`** - Password hashing, JWT tokens, users, register/login handlers
//! - **`kittens`** - Kitten persistence and handlers
//! - **`middleware`** - Bearer token authentication
//! - **`error`** - `ApiError` and its HTTP mapping
//! - **`landing`** - Static landing page
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── kittens/        - Kitten resource
//! ├── middleware/     - Request middleware
//! ├── error/          - Error types
//! └── landing.rs      - GET /
//! ```
//!
//! # State Management
//!
//! `AppState` holds the database pool, the token issuer and the password
//! hasher. None of it is mutated after startup, so it is cloned into every
//! handler without locks.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, ApiError>`. `ApiError` maps each failure to
//! its status code and logs it once, when the response is built.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Kitten resource
pub mod kittens;

/// Middleware for request processing
pub mod middleware;

/// Landing page
pub mod landing;

pub use error::ApiError;
pub use server::{build_app, create_app, AppState, ServerConfig};
