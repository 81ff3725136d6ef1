/**
 * Login Handler
 *
 * POST /login
 *
 * # Authentication Process
 *
 * 1. Look up user by username
 * 2. Verify password using bcrypt
 * 3. Issue a token
 *
 * # Security
 *
 * - Unknown user and wrong password both return 401 `Unauthorized`
 * - Password verification uses bcrypt's own comparison
 * - Passwords are never logged or returned
 */

use axum::{extract::State, Json};

use crate::backend::auth::error::AuthError;
use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::backend::auth::users::get_user_by_username;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - user not found or password incorrect
/// * `500 Internal Server Error` - store or signing failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    tracing::info!("Login request for: {}", request.username);

    let user = state
        .store(get_user_by_username(&state.db_pool, &request.username))
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", request.username);
            AuthError::InvalidCredentials
        })?;

    if !state.passwords.verify(&request.password, &user.password_hash).await {
        tracing::warn!("Invalid password for user: {}", request.username);
        return Err(AuthError::InvalidCredentials.into());
    }

    let token = state.tokens.issue(user.id, &user.username)?;

    tracing::info!("User logged in successfully: {}", user.username);

    Ok(Json(AuthResponse::success(token)))
}
