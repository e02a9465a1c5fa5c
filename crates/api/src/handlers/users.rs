//! Handlers for participant registration and existence checks.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use heatvote_core::error::CoreError;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /api/users/`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub user_id: String,
}

/// Acknowledgment body shared by the mutating endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Existence confirmation for `GET /api/check_user/{user_id}`.
#[derive(Debug, Serialize)]
pub struct ExistsResponse {
    pub exists: bool,
}

/// POST /api/users/
///
/// Registers a new participant with `last_voted = 0` and an empty votes
/// mapping. Duplicate ids are rejected with 400.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<Json<MessageResponse>> {
    if input.user_id.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "user_id must not be empty".to_string(),
        )));
    }

    state.store.insert_participant(&input.user_id).await?;

    tracing::info!(user_id = %input.user_id, "Participant registered");

    Ok(Json(MessageResponse {
        message: "User created successfully",
    }))
}

/// GET /api/check_user/{user_id}
///
/// Pure read; 404 for unknown ids.
pub async fn check_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<ExistsResponse>> {
    let participant = state.store.find_participant(&user_id).await?;

    if participant.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }));
    }

    Ok(Json(ExistsResponse { exists: true }))
}
