/**
 * Server Initialization
 *
 * Builds the Axum application from a `ServerConfig`:
 * 1. Open the SQLite pool and run migrations
 * 2. Build `AppState` (pool, token issuer, password hasher)
 * 3. Create the router with all routes
 */

use axum::Router;
use sqlx::SqlitePool;
use thiserror::Error;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ConfigError, ServerConfig};
use crate::backend::server::state::AppState;

/// Errors that abort startup
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Connect to the configured database and build the application
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, StartupError> {
    tracing::info!("Initializing Cyber Kittens backend server");

    let db_pool = load_database(config).await?;
    Ok(build_app(db_pool, config))
}

/// Build the application around an existing, migrated pool
pub fn build_app(db_pool: SqlitePool, config: &ServerConfig) -> Router<()> {
    let app_state = AppState::new(db_pool, config);
    let app = create_router(app_state);
    tracing::info!("Router configured");
    app
}
