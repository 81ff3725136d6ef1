//! Server Module
//!
//! Server initialization and configuration.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementation
//! ├── config.rs       - Configuration loading, database pool
//! └── init.rs         - App creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env` (secret is required)
//! 2. **Database**: pool creation and embedded migrations
//! 3. **State Creation**: token issuer and hasher built from the config
//! 4. **Router Creation**: routes, auth middleware and tracing layer

pub mod state;

pub mod config;

pub mod init;

// Re-export commonly used types
pub use config::{ConfigError, ServerConfig};
pub use init::{build_app, create_app, StartupError};
pub use state::AppState;
