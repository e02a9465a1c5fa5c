//! Handler for vote submission.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use heatvote_core::error::CoreError;
use heatvote_core::types::FolderId;
use heatvote_core::{methods, progress};

use crate::error::{AppError, AppResult};
use crate::handlers::users::MessageResponse;
use crate::state::AppState;

/// Request body for `POST /api/vote/`.
#[derive(Debug, Deserialize)]
pub struct VoteRequest {
    pub user_id: String,
    pub folder_id: FolderId,
    pub heatmap_method: String,
}

/// POST /api/vote/
///
/// Records the chosen method for a folder and advances the participant's
/// progress pointer. The vote must target exactly `last_voted + 1`; the
/// server never trusts a client-claimed folder id beyond that.
pub async fn record_vote(
    State(state): State<AppState>,
    Json(input): Json<VoteRequest>,
) -> AppResult<Json<MessageResponse>> {
    methods::validate_method(&input.heatmap_method)?;

    let participant = state
        .store
        .find_participant(&input.user_id)
        .await?
        .ok_or_else(|| CoreError::NotFound {
            entity: "User",
            id: input.user_id.clone(),
        })?;

    progress::validate_vote_target(
        participant.last_voted,
        input.folder_id,
        state.config.total_folders,
    )?;

    let applied = state
        .store
        .record_vote(&input.user_id, input.folder_id, &input.heatmap_method)
        .await?;

    if !applied {
        // The store's own sequence guard refused: a concurrent vote advanced
        // the pointer between our read and the update.
        return Err(AppError::Core(CoreError::Validation(format!(
            "Vote for folder {} is out of sequence",
            input.folder_id
        ))));
    }

    tracing::info!(
        user_id = %input.user_id,
        folder_id = input.folder_id,
        method = %input.heatmap_method,
        "Vote recorded"
    );

    Ok(Json(MessageResponse {
        message: "Vote recorded successfully",
    }))
}
