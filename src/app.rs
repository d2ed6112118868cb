use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::handlers;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Build the service router. Every operation answers with and without a
/// trailing slash, and any origin may call it.
pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(handlers::health::check))
        .route("/generate-dataset", post(handlers::dataset::generate))
        .route("/generate-dataset/", post(handlers::dataset::generate))
        .route("/predict", post(handlers::predict::predict))
        .route("/predict/", post(handlers::predict::predict))
        .route("/plot", post(handlers::plot::plot))
        .route("/plot/", post(handlers::plot::plot))
        .layer(DefaultBodyLimit::max(upload_limit))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
