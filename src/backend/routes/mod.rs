//! Route Configuration Module
//!
//! Configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs            - Module exports and documentation
//! ├── router.rs         - Main router creation
//! ├── api_routes.rs     - Public credential endpoints
//! └── kitten_routes.rs  - Token-protected kitten endpoints
//! ```
//!
//! # Routes
//!
//! - `GET /` - Landing page
//! - `POST /register` - User registration
//! - `POST /login` - User login
//! - `POST /kittens` - Create kitten (token required)
//! - `GET /kittens/{id}` - Read kitten (token required, owner only)
//! - `DELETE /kittens/{id}` - Delete kitten (token required, owner only)

/// Main router creation
pub mod router;

/// Public credential routes
pub mod api_routes;

/// Protected kitten routes
pub mod kitten_routes;

pub use router::create_router;
