//! Error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// Problems with caller-supplied data: tables, counts, seeds.
#[derive(Debug, Error, PartialEq)]
pub enum DataError {
    #[error("payload is empty")]
    EmptyPayload,

    #[error("table has no rows")]
    NoRows,

    #[error("missing required column '{0}'")]
    MissingColumn(String),

    #[error("headerless table must have 2 or 3 columns, found {0}")]
    UnsupportedWidth(usize),

    #[error("row {row}, column '{column}': '{value}' is not a finite number")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    #[error("malformed CSV: {0}")]
    Malformed(String),

    #[error("sample count must be at least {min}, got {requested}")]
    TooFewSamples { requested: usize, min: usize },

    #[error("sample count must be at most {max}, got {requested}")]
    TooManySamples { requested: usize, max: usize },
}

impl From<csv::Error> for DataError {
    fn from(err: csv::Error) -> Self {
        DataError::Malformed(err.to_string())
    }
}

/// Errors surfaced at the HTTP boundary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("upload exceeds the {0} byte limit")]
    PayloadTooLarge(usize),

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::Validation(msg) => {
                log::warn!("Rejected request: {}", msg);
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            AppError::PayloadTooLarge(limit) => {
                log::warn!("Rejected upload over {} bytes", limit);
                (StatusCode::PAYLOAD_TOO_LARGE, self.to_string())
            }
            AppError::Internal(msg) => {
                log::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<DataError> for AppError {
    fn from(err: DataError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(format!("{err:#}"))
    }
}
