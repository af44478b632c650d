use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::storage::StorageError;
use sea_orm::DbErr;
use serde::Serialize;

/// Structured error response returned by all endpoints on failure.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Machine-readable error code. One of: `VALIDATION_ERROR`, `NOT_FOUND`,
    /// `INTERNAL_ERROR`.
    #[schema(example = "VALIDATION_ERROR")]
    pub code: &'static str,
    /// Human-readable error description.
    #[schema(example = "Missing 'audio' field")]
    pub message: String,
}

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    Validation(String),
    NotFound(String),
    Internal(String),
}

impl AppError {
    fn status_and_body(self) -> (StatusCode, ErrorBody) {
        match self {
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    code: "VALIDATION_ERROR",
                    message: msg,
                },
            ),
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    code: "NOT_FOUND",
                    message: msg,
                },
            ),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        code: "INTERNAL_ERROR",
                        message: "An unexpected error occurred".into(),
                    },
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(name) => AppError::NotFound(format!("File '{name}' not found")),
            StorageError::InvalidName(msg) => AppError::Validation(msg.into()),
            StorageError::SizeLimitExceeded { actual, limit } => AppError::Validation(format!(
                "File exceeds maximum size of {limit} bytes (got {actual})"
            )),
            StorageError::Io(e) => AppError::Internal(format!("Storage IO error: {e}")),
        }
    }
}
