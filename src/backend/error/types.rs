/**
 * Backend Error Types
 *
 * `ApiError` is the one error type handlers return. Each variant maps to a
 * fixed HTTP status:
 *
 * - `Validation` - 400, bad or missing fields
 * - `Auth` - 401, missing/invalid/expired token or bad credentials
 * - `Ownership` - 401, valid identity but someone else's resource
 * - `NotFound` - 404
 * - `Conflict` - 409, duplicate unique field
 * - `Store`, `Timeout`, `Internal` - 500
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::error::AuthError;

/// Backend-specific error types
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body failed a basic check
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Caller could not be authenticated
    #[error(transparent)]
    Auth(AuthError),

    /// Caller is authenticated but does not own the resource
    #[error("resource is owned by another user")]
    Ownership,

    /// Resource does not exist
    #[error("resource not found")]
    NotFound,

    /// Unique field already taken
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// The store returned an error
    #[error("Store error: {0}")]
    Store(sqlx::Error),

    /// The store did not answer in time
    #[error("store operation timed out")]
    Timeout,

    /// Anything else the caller cannot fix
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Auth(_) | Self::Ownership => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Store(_) | Self::Timeout | Self::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Taxonomy name, used as `name` in structured error bodies
    pub fn name(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "ValidationError",
            Self::Auth(_) => "AuthError",
            Self::Ownership => "OwnershipError",
            Self::NotFound => "NotFoundError",
            Self::Conflict { .. } => "ConflictError",
            Self::Store(_) | Self::Timeout | Self::Internal { .. } => "InternalError",
        }
    }

    /// Message safe to show a client
    ///
    /// Store details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            Self::Validation { message } | Self::Conflict { message } => message.clone(),
            Self::Store(_) => "store operation failed".to_string(),
            Self::Internal { .. } => "an unexpected error occurred".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        if err.is_rejection() {
            Self::Auth(err)
        } else {
            Self::internal(err.to_string())
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                Self::conflict("resource already exists")
            }
            _ => Self::Store(err),
        }
    }
}
