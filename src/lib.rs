pub mod api;
pub mod core;
pub mod error;
pub mod proxy;
pub mod state;

use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Full application router: endpoints, CORS and request logging.
pub fn build_app(state: Arc<state::AppState>) -> Router {
    // Any origin/method/header with credentials: origins and headers are mirrored
    // because the `*` wildcard is not allowed together with credentials.
    let cors = CorsLayer::very_permissive();

    Router::new()
        .merge(api::build_routes(state))
        .layer(cors)
        .layer(axum::middleware::from_fn(api::common::request_logger))
}
