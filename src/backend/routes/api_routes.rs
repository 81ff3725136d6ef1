/**
 * Credential Routes
 *
 * Public endpoints that hand out bearer tokens.
 *
 * # Routes
 *
 * - `POST /register` - User registration
 * - `POST /login` - User login
 */

use axum::{routing::post, Router};

use crate::backend::auth::{login, register};
use crate::backend::server::state::AppState;

/// Configure the public credential routes
///
/// Neither route requires a token; both answer with a fresh one.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/register", post(register))
        .route("/login", post(login))
}
