use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use heatvote_assets::LabelError;
use heatvote_core::error::CoreError;
use heatvote_db::StoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps the domain and collaborator error types and implements
/// [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `heatvote_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An error from the participant store.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A label fetch from the asset host failed.
    #[error(transparent)]
    Label(#[from] LabelError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} '{id}' not found"),
                ),
                // The survey frontend expects 400 for duplicate registration,
                // not 409.
                CoreError::AlreadyExists { entity, id } => (
                    StatusCode::BAD_REQUEST,
                    "ALREADY_EXISTS",
                    format!("{entity} '{id}' already exists"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Store errors ---
            AppError::Store(StoreError::AlreadyExists(id)) => (
                StatusCode::BAD_REQUEST,
                "ALREADY_EXISTS",
                format!("User '{id}' already exists"),
            ),
            AppError::Store(err) => {
                tracing::error!(error = %err, "Participant store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }

            // --- Asset host errors ---
            // Fail closed: a missing label aborts the assignment rather than
            // shipping a guessed placeholder.
            AppError::Label(err) => {
                tracing::error!(error = %err, "Label fetch failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "UPSTREAM_ERROR",
                    "Failed to fetch object label from asset host".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
