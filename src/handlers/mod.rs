//! HTTP handlers

pub mod dataset;
pub mod health;
pub mod plot;
pub mod predict;

use axum::{
    body::Bytes,
    extract::multipart::{MultipartError, MultipartRejection},
    extract::Multipart,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::{AppError, AppResult};

/// Pull the uploaded table out of a multipart form. The field named `file`
/// wins; otherwise the first field is used. A body over `limit` bytes is a
/// 413, not a 400.
pub(crate) async fn read_upload(
    multipart: Result<Multipart, MultipartRejection>,
    limit: usize,
) -> AppResult<Bytes> {
    let stream_error = |e: MultipartError| {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(limit)
        } else {
            AppError::Validation(e.body_text())
        }
    };

    let mut multipart = multipart.map_err(|e| AppError::Validation(e.body_text()))?;

    let mut first = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(stream_error)?
    {
        let is_file = field.name() == Some("file");
        let bytes = field
            .bytes()
            .await
            .map_err(stream_error)?;
        if is_file {
            return Ok(bytes);
        }
        if first.is_none() {
            first = Some(bytes);
        }
    }

    first.ok_or_else(|| AppError::Validation("multipart form has no 'file' field".to_string()))
}

/// A downloadable body with the given media type.
pub(crate) fn attachment(content_type: &'static str, filename: &str, body: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={filename}"),
            ),
        ],
        body,
    )
        .into_response()
}
