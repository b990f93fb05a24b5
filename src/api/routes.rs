//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{health, not_found, root, AppState};

/// Create the API router.
///
/// Only `GET /` and `GET /health` are served; other methods on those paths
/// and every other path answer 404. Debug mode adds request tracing.
pub fn create_router(state: AppState) -> Router {
    let debug = state.debug();

    let router = Router::new()
        .route("/", get(root).fallback(not_found))
        .route("/health", get(health).fallback(not_found))
        .fallback(not_found)
        .with_state(state);

    if debug {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}
