//! Middleware Module
//!
//! HTTP middleware for the backend server.
//!
//! - **`auth`** - Bearer token authentication for the kitten routes
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//! use cyber_kittens::backend::middleware::auth_middleware;
//!
//! let protected = Router::new()
//!     .route("/kittens", post(create_kitten))
//!     .route_layer(from_fn_with_state(app_state.tokens.clone(), auth_middleware));
//! ```

pub mod auth;

pub use auth::{auth_middleware, authenticate, bearer_token, AuthUser, AuthenticatedUser};
