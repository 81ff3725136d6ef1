/**
 * Kitten HTTP Handlers
 *
 * Every handler takes the caller's identity from `AuthUser`, so none of
 * them can run without a verified token. Read and delete look the kitten
 * up first and only then compare owners:
 *
 * - missing kitten: 404
 * - kitten owned by someone else: 401
 *
 * Ids that are not an `i64` can never name a kitten, so they are 404 as well.
 */

use axum::{
    extract::{Path, State},
    http::{header::LOCATION, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use super::db::{self, Kitten};
use crate::backend::error::ApiError;
use crate::backend::middleware::auth::{AuthUser, AuthenticatedUser};
use crate::backend::server::state::AppState;
use crate::shared::kitten::{KittenView, NewKitten};

fn kitten_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse().map_err(|_| ApiError::NotFound)
}

/// Load a kitten and check the caller owns it
async fn owned_kitten(
    state: &AppState,
    user: &AuthenticatedUser,
    id: i64,
) -> Result<Kitten, ApiError> {
    let kitten = state
        .store(db::get_kitten_by_id(&state.db_pool, id))
        .await?
        .ok_or(ApiError::NotFound)?;

    if !kitten.is_owned_by(user.user_id) {
        tracing::warn!("User {} tried to access kitten {} it does not own", user.user_id, id);
        return Err(ApiError::Ownership);
    }

    Ok(kitten)
}

/// POST /kittens
///
/// The new id is only in the `Location` header; the body echoes the input.
pub async fn create_kitten(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(request): Json<NewKitten>,
) -> Result<Response, ApiError> {
    let kitten = state
        .store(db::create_kitten(&state.db_pool, user.user_id, &request))
        .await?;

    tracing::info!("Kitten {} created for user {}", kitten.id, user.user_id);

    let location = format!("/kittens/{}", kitten.id);
    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(kitten.view())).into_response())
}

/// GET /kittens/{id}
pub async fn get_kitten(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<KittenView>, ApiError> {
    let kitten = owned_kitten(&state, &user, kitten_id(&id)?).await?;
    Ok(Json(kitten.view()))
}

/// DELETE /kittens/{id}
pub async fn delete_kitten(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = kitten_id(&id)?;
    owned_kitten(&state, &user, id).await?;

    // Gone between the lookup and the delete: treat as never there.
    if !state.store(db::delete_kitten(&state.db_pool, id)).await? {
        return Err(ApiError::NotFound);
    }

    tracing::info!("Kitten {} deleted by user {}", id, user.user_id);
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::users::create_user;
    use crate::backend::server::config::{connect_in_memory, ServerConfig};
    use assert_matches::assert_matches;

    async fn test_state() -> AppState {
        let config = ServerConfig::builder()
            .jwt_secret("neverTell")
            .bcrypt_cost(4)
            .build()
            .unwrap();
        AppState::new(connect_in_memory().await.unwrap(), &config)
    }

    async fn user(state: &AppState, username: &str) -> AuthUser {
        let user = create_user(&state.db_pool, username, "hash").await.unwrap();
        AuthUser(AuthenticatedUser {
            user_id: user.id,
            username: user.username,
        })
    }

    fn katy() -> NewKitten {
        NewKitten {
            name: "Katy Purry".to_string(),
            age: 3,
            color: "golden".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_sets_owner() {
        let state = test_state().await;
        let owner = user(&state, "buster").await;
        let owner_id = owner.0.user_id;

        let response = create_kitten(State(state.clone()), owner, Json(katy()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let location = response.headers()[LOCATION].to_str().unwrap().to_string();
        let id: i64 = location.trim_start_matches("/kittens/").parse().unwrap();
        let stored = db::get_kitten_by_id(&state.db_pool, id).await.unwrap().unwrap();
        assert_eq!(stored.owner_id, owner_id);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let state = test_state().await;
        let owner = user(&state, "buster").await;

        let result = get_kitten(State(state), owner, Path("9999".to_string())).await;
        assert_matches!(result, Err(ApiError::NotFound));
    }

    #[tokio::test]
    async fn test_unparseable_id_is_not_found() {
        let state = test_state().await;
        let owner = user(&state, "buster").await;

        for id in ["abc", "1.5", "-", "99999999999999999999"] {
            let result = get_kitten(State(state.clone()), owner.clone(), Path(id.to_string())).await;
            assert_matches!(result, Err(ApiError::NotFound));

            let result =
                delete_kitten(State(state.clone()), owner.clone(), Path(id.to_string())).await;
            assert_matches!(result, Err(ApiError::NotFound));
        }
    }

    #[tokio::test]
    async fn test_get_and_delete_by_stranger() {
        let state = test_state().await;
        let owner = user(&state, "buster").await;
        let stranger = user(&state, "notbuster").await;
        let kitten = db::create_kitten(&state.db_pool, owner.0.user_id, &katy())
            .await
            .unwrap();

        let id = kitten.id.to_string();
        let result = get_kitten(State(state.clone()), stranger.clone(), Path(id.clone())).await;
        assert_matches!(result, Err(ApiError::Ownership));

        let result = delete_kitten(State(state.clone()), stranger, Path(id)).await;
        assert_matches!(result, Err(ApiError::Ownership));

        assert!(db::get_kitten_by_id(&state.db_pool, kitten.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_owner_reads_and_deletes() {
        let state = test_state().await;
        let owner = user(&state, "buster").await;
        let kitten = db::create_kitten(&state.db_pool, owner.0.user_id, &katy())
            .await
            .unwrap();

        let id = kitten.id.to_string();
        let view = get_kitten(State(state.clone()), owner.clone(), Path(id.clone()))
            .await
            .unwrap();
        assert_eq!(view.name, "Katy Purry");

        let status = delete_kitten(State(state.clone()), owner.clone(), Path(id.clone()))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);

        let again = delete_kitten(State(state), owner, Path(id)).await;
        assert_matches!(again, Err(ApiError::NotFound));
    }
}
