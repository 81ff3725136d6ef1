/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration and
 * the SQLite connection pool.
 *
 * # Configuration Sources
 *
 * Configuration is loaded from environment variables (a `.env` file is
 * read by the binary first), with defaults for everything except the
 * signing secret:
 *
 * | Variable             | Default                          |
 * |----------------------|----------------------------------|
 * | `DATABASE_URL`       | `sqlite://kittens.db?mode=rwc`   |
 * | `JWT_SECRET`         | required                         |
 * | `TOKEN_TTL_SECS`     | `86400` (at most one year)       |
 * | `BCRYPT_COST`        | `10`                             |
 * | `STORE_TIMEOUT_SECS` | `5`                              |
 * | `PORT`               | `4000`                           |
 *
 * # Error Handling
 *
 * Unlike optional services, the store and the secret are required: a
 * missing secret or an unreachable database stops startup.
 */

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use thiserror::Error;

use crate::backend::auth::password::DEFAULT_COST;
use crate::backend::auth::sessions::{DEFAULT_TOKEN_TTL, MAX_TOKEN_TTL};

pub const DEFAULT_DATABASE_URL: &str = "sqlite://kittens.db?mode=rwc";
pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Server configuration, read-only once built
#[derive(Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub token_ttl: Duration,
    pub bcrypt_cost: u32,
    pub store_timeout: Duration,
    pub port: u16,
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key/value source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut builder = Self::builder();

        if let Some(url) = lookup("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(secret) = lookup("JWT_SECRET") {
            builder = builder.jwt_secret(secret);
        }
        if let Some(ttl) = lookup("TOKEN_TTL_SECS") {
            builder = builder.token_ttl(Duration::from_secs(parse("TOKEN_TTL_SECS", &ttl)?));
        }
        if let Some(cost) = lookup("BCRYPT_COST") {
            builder = builder.bcrypt_cost(parse("BCRYPT_COST", &cost)?);
        }
        if let Some(timeout) = lookup("STORE_TIMEOUT_SECS") {
            builder = builder
                .store_timeout(Duration::from_secs(parse("STORE_TIMEOUT_SECS", &timeout)?));
        }
        if let Some(port) = lookup("PORT") {
            builder = builder.port(parse("PORT", &port)?);
        }

        builder.build()
    }
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("database_url", &self.database_url)
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl", &self.token_ttl)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("store_timeout", &self.store_timeout)
            .field("port", &self.port)
            .finish()
    }
}

fn parse<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    database_url: Option<String>,
    jwt_secret: Option<String>,
    token_ttl: Option<Duration>,
    bcrypt_cost: Option<u32>,
    store_timeout: Option<Duration>,
    port: Option<u16>,
}

impl ServerConfigBuilder {
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    pub fn token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = Some(ttl);
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    pub fn store_timeout(mut self, timeout: Duration) -> Self {
        self.store_timeout = Some(timeout);
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let jwt_secret = self
            .jwt_secret
            .filter(|secret| !secret.is_empty())
            .ok_or(ConfigError::MissingValue("JWT_SECRET"))?;

        let token_ttl = self.token_ttl.unwrap_or(DEFAULT_TOKEN_TTL);
        if token_ttl.is_zero() || token_ttl > MAX_TOKEN_TTL {
            return Err(ConfigError::InvalidValue {
                key: "TOKEN_TTL_SECS",
                value: token_ttl.as_secs().to_string(),
            });
        }

        Ok(ServerConfig {
            database_url: self
                .database_url
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            jwt_secret,
            token_ttl,
            bcrypt_cost: self.bcrypt_cost.unwrap_or(DEFAULT_COST),
            store_timeout: self.store_timeout.unwrap_or(DEFAULT_STORE_TIMEOUT),
            port: self.port.unwrap_or(DEFAULT_PORT),
        })
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Open the connection pool and run migrations
pub async fn load_database(config: &ServerConfig) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(config.store_timeout)
        .connect_with(options)
        .await?;

    tracing::info!("Database connection pool created successfully");

    run_migrations(&pool).await?;
    Ok(pool)
}

/// Apply embedded migrations from `migrations/`
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(pool).await?;
    tracing::info!("Database migrations completed successfully");
    Ok(())
}

/// Migrated in-memory database on a single long-lived connection
///
/// An in-memory SQLite database lives only as long as its connection, so the
/// pool is pinned to exactly one that never idles out.
pub async fn connect_in_memory() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;
    run_migrations(&pool).await?;
    Ok(pool)
}
