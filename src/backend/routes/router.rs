/**
 * Router Configuration
 *
 * Combines all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Landing page (`GET /`)
 * 2. Credential routes (register, login)
 * 3. Kitten routes (behind the auth middleware)
 * 4. Fallback handler (404)
 */

use axum::{http::StatusCode, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::backend::landing::index;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::kitten_routes::kitten_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// Every request is traced through `TraceLayer`. Unknown paths answer
/// `404 Not Found`.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/", get(index));

    // Public credential routes
    let router = configure_api_routes(router);

    // Token-protected kitten routes
    let router = router.merge(kitten_routes(&app_state));

    // Fallback handler for 404
    let router = router.fallback(|| async { (StatusCode::NOT_FOUND, "Not Found") });

    router
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(app_state)
}
