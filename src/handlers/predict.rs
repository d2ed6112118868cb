//! Prediction handler

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    response::Response,
};

use super::{attachment, read_upload};
use crate::data::loader;
use crate::{AppError, AppResult, AppState};

/// Append the fixed-coefficient prediction to every row of an uploaded table
pub async fn predict(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Response> {
    let upload = read_upload(multipart, state.config.max_upload_bytes).await?;
    let table = loader::decode_table(&upload, &state.schemas)?;

    // an incoming prediction column is recomputed, never trusted
    let predicted = state.predictor.predict(table.dataset);
    let body = loader::encode_predicted(&predicted).map_err(|e| AppError::Internal(e.to_string()))?;

    log::info!(
        "Predicted {} rows ({} schema)",
        predicted.len(),
        predicted.dataset.schema
    );
    Ok(attachment("text/csv", "predictions.csv", body))
}
