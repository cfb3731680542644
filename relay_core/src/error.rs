//! Application error types and handling

use crate::validation::ValidationResult;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

pub const TRANSPORT_FAILURE_DETAIL: &str = "Failed to connect to remote service";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation failed")]
    Validation(ValidationResult),

    #[error("Remote service rejected the request with status {status}")]
    RemoteRejection { status: StatusCode, detail: Value },

    #[error("Remote service unreachable: {0}")]
    TransportFailure(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::RemoteRejection { status, .. } => *status,
            AppError::TransportFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::IoError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::JsonError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let (error_message, detail) = match self {
            AppError::Validation(result) => {
                let detail = serde_json::to_value(&result.errors).unwrap_or(Value::Null);
                ("Validation failed".to_string(), detail)
            }
            AppError::RemoteRejection { detail, .. } => {
                ("Remote service rejected the submission".to_string(), detail)
            }
            AppError::TransportFailure(_) => (
                "Remote service unavailable".to_string(),
                Value::String(TRANSPORT_FAILURE_DETAIL.to_string()),
            ),
            AppError::BadRequest(msg) => (msg, Value::Null),
            AppError::UnsupportedMediaType(msg) => (msg, Value::Null),
            AppError::IoError(err) => {
                tracing::error!("IO error: {:?}", err);
                ("Internal server error".to_string(), Value::Null)
            }
            AppError::JsonError(err) => {
                tracing::error!("JSON serialization error: {:?}", err);
                ("Internal server error".to_string(), Value::Null)
            }
            AppError::Other(err) => {
                tracing::error!("Unexpected error: {:?}", err);
                ("Internal server error".to_string(), Value::Null)
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16(),
            "detail": detail,
        }));

        (status, body).into_response()
    }
}
