/**
 * Authentication Middleware
 *
 * Protects routes that require a logged-in user. For each request:
 *
 * - no `Authorization` header: reject with 401, the handler never runs
 * - header not `Bearer <token>`: reject with 401
 * - token fails verification (bad signature, expired, malformed): reject with 401
 * - token valid: attach `AuthenticatedUser` to the request and continue
 *
 * Handlers read the identity through the `AuthUser` extractor, which
 * itself rejects with 401 if no identity was attached.
 */

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::auth::error::AuthError;
use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::error::ApiError;

/// Authenticated user data extracted from a verified token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub username: String,
}

/// Pull the token out of an `Authorization` header value
///
/// Expects exactly two whitespace-separated parts, the first being the
/// `Bearer` scheme (any ASCII case).
pub fn bearer_token(header: &str) -> Result<&str, AuthError> {
    let mut parts = header.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => Ok(token),
        _ => Err(AuthError::MalformedHeader),
    }
}

/// Resolve the caller's identity from request headers
pub fn authenticate(headers: &HeaderMap, tokens: &TokenIssuer) -> Result<AuthenticatedUser, AuthError> {
    let header = headers.get(AUTHORIZATION).ok_or(AuthError::MissingHeader)?;
    let header = header.to_str().map_err(|_| AuthError::MalformedHeader)?;
    let token = bearer_token(header)?;
    let claims = tokens.verify(token)?;

    Ok(AuthenticatedUser {
        user_id: claims.id,
        username: claims.username,
    })
}

/// Authentication middleware
///
/// Returns 401 Unauthorized if the token is missing or invalid.
pub async fn auth_middleware(
    State(tokens): State<Arc<TokenIssuer>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user = authenticate(request.headers(), &tokens).map_err(|e| {
        tracing::warn!("Authentication failed: {}", e);
        ApiError::Auth(e)
    })?;

    tracing::debug!("Authenticated request from {} ({})", user.username, user.user_id);
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

/// Axum extractor for authenticated user
///
/// Only yields a value after `auth_middleware` has attached one.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::Auth(AuthError::MissingHeader)
            })?;

        Ok(AuthUser(user))
    }
}
