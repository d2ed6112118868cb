//! Health check handler

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    #[serde(rename = "App")]
    app: &'static str,
    version: &'static str,
}

pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse {
        app: "Running",
        version: env!("CARGO_PKG_VERSION"),
    })
}
