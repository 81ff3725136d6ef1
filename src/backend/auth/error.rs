/**
 * Authentication Errors
 *
 * Failure modes of the authentication flow. Header and token problems all
 * end up as 401, but they are kept apart here so logs can tell a missing
 * header from an expired token.
 */

use thiserror::Error;

/// Authentication error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No `Authorization` header on the request
    #[error("missing authorization header")]
    MissingHeader,

    /// Header present but not `Bearer <token>`
    #[error("malformed authorization header")]
    MalformedHeader,

    /// Token decoded but its signature does not match the server secret
    #[error("token signature is invalid")]
    InvalidSignature,

    /// Token signature is fine but `exp` is in the past
    #[error("token has expired")]
    Expired,

    /// Token could not be decoded at all, or carries unexpected claims
    #[error("token is malformed")]
    Malformed,

    /// Unknown username or wrong password; the two are never distinguished
    #[error("invalid username or password")]
    InvalidCredentials,

    /// Password hashing failed
    #[error("password hashing failed: {0}")]
    Hashing(String),

    /// Token signing failed
    #[error("token signing failed: {0}")]
    Signing(String),
}

impl AuthError {
    /// Whether this error is caused by the caller rather than the server
    pub fn is_rejection(&self) -> bool {
        !matches!(self, Self::Hashing(_) | Self::Signing(_))
    }
}
