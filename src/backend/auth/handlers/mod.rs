//! Authentication Handlers Module
//!
//! HTTP handlers for the credential endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Handler exports
//! ├── types.rs     - Request and response types
//! ├── register.rs  - User registration handler
//! └── login.rs     - User authentication handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /register
//! - **`login`** - POST /login
//!
//! Both answer `{"message": "success", "token": "..."}` on success.

pub mod types;

pub mod register;

pub mod login;

// Re-export commonly used types
pub use types::{AuthResponse, CredentialsRequest, LoginRequest, RegisterRequest};

// Re-export handlers
pub use login::login;
pub use register::register;
