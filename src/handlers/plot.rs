//! Regression chart handler

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::{HeaderName, HeaderValue},
    response::Response,
};

use super::{attachment, read_upload};
use crate::data::loader;
use crate::{AppError, AppResult, AppState};

/// Response header carrying the unrounded metric shown in the chart title.
pub const METRIC_HEADER: &str = "x-error-metric";

/// Render actual vs predicted sizes as a PNG
pub async fn plot(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Response> {
    let upload = read_upload(multipart, state.config.max_upload_bytes).await?;
    let table = loader::decode_table(&upload, &state.schemas)?;
    let chart = state.visualizer.prepare(table)?;

    let (metric, score) = (chart.metric, chart.score);
    let rows = chart.actual.len();
    let png = tokio::task::spawn_blocking(move || chart.render_png())
        .await
        .map_err(|e| AppError::Internal(format!("render task failed: {e}")))??;

    log::info!(
        "Plotted {} rows ({}: {:.4}, {} bytes)",
        rows,
        metric,
        score,
        png.len()
    );

    let mut response = attachment("image/png", "plot.png", png);
    let value = HeaderValue::from_str(&score.to_string())
        .map_err(|e| AppError::Internal(e.to_string()))?;
    response
        .headers_mut()
        .insert(HeaderName::from_static(METRIC_HEADER), value);
    Ok(response)
}
