use axum::Json;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Message returned to callers when a subscription could not be persisted.
/// The underlying cause is logged, never exposed.
pub const STORAGE_FAILURE_MESSAGE: &str = "Failed to save subscription";

/// The request body could not be read, is not JSON, or is not the JSON shape
/// of a subscription request.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// Body could not be buffered, e.g. it exceeds the request body limit.
    #[error("Decode error: {0}")]
    Body(#[from] BytesRejection),
}

/// Any failure reported by a subscription store.
#[derive(Debug, Error)]
#[error("Storage error: {0}")]
pub struct StorageError(#[source] anyhow::Error);

impl StorageError {
    pub fn new(err: impl Into<anyhow::Error>) -> Self {
        Self(err.into())
    }

    pub fn msg(message: impl std::fmt::Display) -> Self {
        Self(anyhow::anyhow!("{}", message))
    }
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        Self::new(err)
    }
}

/// Errors surfaced at the HTTP boundary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Decode(_) => StatusCode::BAD_REQUEST,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::Decode(e) => {
                tracing::warn!(error = %e, "Rejected subscription request");
                e.to_string()
            }
            AppError::Storage(e) => {
                tracing::error!(error = %e, "Subscription store failed");
                STORAGE_FAILURE_MESSAGE.to_string()
            }
        };

        let body = json!({ "error": message });
        (status, Json(body)).into_response()
    }
}
