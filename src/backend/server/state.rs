/**
 * Application State Management
 *
 * `AppState` holds everything handlers share. All of it is read-only after
 * startup: the pool is internally synchronized, and the token issuer and
 * password hasher never change once built.
 *
 * The `FromRef` implementation lets the auth middleware take just the
 * token issuer.
 */

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::error::ApiError;
use crate::backend::server::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,

    pub tokens: Arc<TokenIssuer>,

    pub passwords: PasswordHasher,

    /// Upper bound on any single store call
    pub store_timeout: Duration,
}

impl AppState {
    pub fn new(db_pool: SqlitePool, config: &ServerConfig) -> Self {
        Self {
            db_pool,
            tokens: Arc::new(TokenIssuer::new(config.jwt_secret.as_bytes(), config.token_ttl)),
            passwords: PasswordHasher::new(config.bcrypt_cost),
            store_timeout: config.store_timeout,
        }
    }

    /// Run one store operation under the configured timeout
    pub async fn store<T, F>(&self, operation: F) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        match tokio::time::timeout(self.store_timeout, operation).await {
            Ok(result) => result.map_err(ApiError::from),
            Err(_) => Err(ApiError::Timeout),
        }
    }
}

impl FromRef<AppState> for Arc<TokenIssuer> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}
