/**
 * Register Handler
 *
 * POST /register
 *
 * # Registration Process
 *
 * 1. Reject empty username or password (400)
 * 2. Hash the password with bcrypt
 * 3. Create the user (409 if the name is taken)
 * 4. Issue a token bound to the new user's id and username
 *
 * Name collisions are left to the `UNIQUE` constraint on `users.username`,
 * so concurrent registrations of the same name cannot both succeed.
 */

use axum::{extract::State, Json};

use crate::backend::auth::handlers::types::{AuthResponse, RegisterRequest};
use crate::backend::auth::users::create_user;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

fn validate(request: &RegisterRequest) -> Result<(), ApiError> {
    if request.username.trim().is_empty() {
        return Err(ApiError::validation("username is required"));
    }
    if request.password.is_empty() {
        return Err(ApiError::validation("password is required"));
    }
    Ok(())
}

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - empty username or password
/// * `409 Conflict` - username already taken
/// * `500 Internal Server Error` - store, hashing or signing failure
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    tracing::info!("Register request for username: {}", request.username);

    validate(&request)?;

    let password_hash = state.passwords.hash(&request.password).await?;

    let user = state
        .store(create_user(&state.db_pool, &request.username, &password_hash))
        .await
        .map_err(|e| match e {
            ApiError::Conflict { .. } => {
                tracing::warn!("Username already exists: {}", request.username);
                ApiError::conflict("username already taken")
            }
            other => other,
        })?;

    let token = state.tokens.issue(user.id, &user.username)?;

    tracing::info!("User registered successfully: {} ({})", user.username, user.id);

    Ok(Json(AuthResponse::success(token)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::users::get_user_by_username;
    use crate::backend::server::config::{connect_in_memory, ServerConfig};
    use axum::http::StatusCode;

    async fn test_state() -> AppState {
        let config = ServerConfig::builder()
            .jwt_secret("neverTell")
            .bcrypt_cost(4)
            .build()
            .unwrap();
        AppState::new(connect_in_memory().await.unwrap(), &config)
    }

    fn request(username: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_success() {
        let state = test_state().await;

        let response = register(State(state.clone()), Json(request("buster", "bustthis")))
            .await
            .unwrap();
        assert_eq!(response.message, "success");

        let user = get_user_by_username(&state.db_pool, "buster").await.unwrap().unwrap();
        assert_ne!(user.password_hash, "bustthis");

        let claims = state.tokens.verify(&response.token).unwrap();
        assert_eq!(claims.id, user.id);
        assert_eq!(claims.username, "buster");
    }

    #[tokio::test]
    async fn test_register_duplicate() {
        let state = test_state().await;

        register(State(state.clone()), Json(request("buster", "bustthis")))
            .await
            .unwrap();
        let err = register(State(state), Json(request("buster", "other")))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
        assert_eq!(err.public_message(), "username already taken");
    }

    #[tokio::test]
    async fn test_register_concurrent_same_name() {
        let state = test_state().await;

        let (first, second) = tokio::join!(
            register(State(state.clone()), Json(request("buster", "bustthis"))),
            register(State(state.clone()), Json(request("buster", "other"))),
        );

        let conflicts = [&first, &second]
            .into_iter()
            .filter(|result| {
                matches!(result, Err(err) if err.status_code() == StatusCode::CONFLICT)
            })
            .count();
        assert!(first.is_ok() || second.is_ok());
        assert_eq!(conflicts, 1);
    }

    #[tokio::test]
    async fn test_register_empty_fields() {
        let state = test_state().await;

        let err = register(State(state.clone()), Json(request("", "bustthis")))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err = register(State(state), Json(request("buster", "")))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
