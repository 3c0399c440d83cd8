//! HTTP error mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use vbump_application::StoreError;

/// Result type alias for handler operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Wrapper turning store errors into HTTP responses.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub StoreError);

/// JSON body returned for failed requests.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: &'static str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match &self.0 {
            // Bad caller input, never retried.
            StoreError::InvalidFormat(_) => (StatusCode::UNPROCESSABLE_ENTITY, "invalid_format"),
            StoreError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            // Storage integrity or I/O problems are internal.
            StoreError::CorruptState { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "corrupt_state")
            }
            StoreError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "repository_error"),
        };

        let message = self.0.to_string();
        if status.is_server_error() {
            tracing::error!("{message}");
        } else {
            tracing::warn!("{message}");
        }

        (status, Json(ErrorResponse { error, message })).into_response()
    }
}
