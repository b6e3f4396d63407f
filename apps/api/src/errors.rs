use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The pipeline-specific variants carry user-facing remediation text — the
/// message is shown to the user as-is, so it must say what to do next, not
/// just what broke.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// Credential missing/invalid or an upstream model call failed.
    /// Never fatal to the session.
    #[error("Model error: {0}")]
    Model(String),

    /// PDF text was too short after primary and fallback extraction.
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// The model responded, but the structured response was not valid JSON.
    /// Kept distinct from `Model` so the UI can phrase recovery differently.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Archive build/serialization failed. The session's schema is untouched,
    /// so a retry needs no re-extraction.
    #[error("Packaging error: {0}")]
    Packaging(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            AppError::Model(msg) => {
                tracing::error!("Model error: {msg}");
                (StatusCode::BAD_GATEWAY, "MODEL_ERROR", msg.clone())
            }
            AppError::Extraction(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "EXTRACTION_ERROR",
                msg.clone(),
            ),
            AppError::Parse(msg) => {
                tracing::warn!("Parse error: {msg}");
                (StatusCode::UNPROCESSABLE_ENTITY, "PARSE_ERROR", msg.clone())
            }
            AppError::Packaging(msg) => {
                tracing::error!("Packaging error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PACKAGING_ERROR",
                    msg.clone(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
