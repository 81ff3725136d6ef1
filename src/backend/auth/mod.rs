//! Authentication Module
//!
//! This module handles user registration, login and token management.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── error.rs        - AuthError taxonomy
//! ├── password.rs     - bcrypt hashing and verification
//! ├── sessions.rs     - JWT issuing and verification
//! ├── users.rs        - User model and database operations
//! └── handlers/       - HTTP handlers (register, login)
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: username + password -> user created -> token returned
//! 2. **Login**: username + password -> credentials verified -> token returned
//! 3. **Protected request**: `Authorization: Bearer <token>` -> verified by
//!    `middleware::auth` -> identity handed to the handler
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are stateless HS256 JWTs and always expire
//! - Invalid credentials return 401 without saying which part was wrong

/// Authentication error types
pub mod error;

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// User data model and database operations
pub mod users;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use error::AuthError;
pub use handlers::{login, register, AuthResponse, CredentialsRequest};
pub use password::PasswordHasher;
pub use sessions::{Claims, TokenIssuer};
