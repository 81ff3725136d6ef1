//! Database and server fixtures
//!
//! Every `TestApp` gets its own in-memory SQLite database, so tests never
//! share rows and need no cleanup.

use axum_test::TestServer;
use cyber_kittens::backend::server::config::{connect_in_memory, ServerConfig};
use cyber_kittens::backend::server::init::build_app;
use sqlx::SqlitePool;

pub const TEST_SECRET: &str = "neverTell";

/// Config suitable for tests: fixed secret, cheapest bcrypt cost
pub fn test_config() -> ServerConfig {
    ServerConfig::builder()
        .jwt_secret(TEST_SECRET)
        .bcrypt_cost(4)
        .build()
        .expect("Failed to build test config")
}

/// Test application fixture
pub struct TestApp {
    pub server: TestServer,
    pub pool: SqlitePool,
    pub config: ServerConfig,
}

impl TestApp {
    /// Fresh database, migrated, wrapped in a test server
    pub async fn new() -> Self {
        let pool = connect_in_memory()
            .await
            .expect("Failed to create in-memory database");
        let config = test_config();
        let server = TestServer::new(build_app(pool.clone(), &config))
            .expect("Failed to start test server");

        Self {
            server,
            pool,
            config,
        }
    }
}
