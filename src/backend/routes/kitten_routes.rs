/**
 * Kitten Routes
 *
 * # Routes
 *
 * - `POST /kittens` - Create a kitten owned by the caller
 * - `GET /kittens/{id}` - Read one of the caller's kittens
 * - `DELETE /kittens/{id}` - Delete one of the caller's kittens
 *
 * All three sit behind `auth_middleware`, so a request without a valid
 * bearer token never reaches a handler.
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::backend::kittens::{create_kitten, delete_kitten, get_kitten};
use crate::backend::middleware::auth::auth_middleware;
use crate::backend::server::state::AppState;

/// Build the protected kitten routes
///
/// Uses `route_layer` so unmatched paths still fall through to the 404
/// fallback instead of answering 401.
pub fn kitten_routes(app_state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/kittens", post(create_kitten))
        .route("/kittens/{id}", get(get_kitten).delete(delete_kitten))
        .route_layer(from_fn_with_state(app_state.tokens.clone(), auth_middleware))
}
