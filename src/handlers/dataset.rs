//! Synthetic dataset handler

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Response,
};
use serde::Deserialize;

use super::attachment;
use crate::data::loader;
use crate::{AppError, AppResult, AppState};

#[derive(Debug, Deserialize)]
pub struct GenerateParams {
    #[serde(alias = "n")]
    pub num_stars: usize,
    pub seed: Option<u64>,
}

/// Generate `num_stars` synthetic stars as CSV
pub async fn generate(
    State(state): State<AppState>,
    params: Result<Query<GenerateParams>, QueryRejection>,
) -> AppResult<Response> {
    let Query(params) = params.map_err(|e| AppError::Validation(e.body_text()))?;
    let seed = params.seed.or(state.config.dataset_seed);

    let dataset = state.synthesizer.generate(params.num_stars, seed)?;
    let body = loader::encode_dataset(&dataset).map_err(|e| AppError::Internal(e.to_string()))?;

    log::info!("Generated {} stars (seed: {:?})", dataset.len(), seed);
    Ok(attachment("text/csv", "generated_data.csv", body))
}
