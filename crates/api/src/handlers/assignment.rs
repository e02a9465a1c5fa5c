//! Handler for the next-assignment read.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use heatvote_core::error::CoreError;
use heatvote_core::{assignment, progress};

use crate::error::AppResult;
use crate::state::AppState;

/// Terminal payload once every folder has been voted on.
#[derive(Debug, Serialize)]
pub struct CompleteResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// GET /api/next_image/{user_id}
///
/// Pure read: progress only advances on vote submission, so reloading this
/// endpoint re-serves the same folder, each time with a freshly shuffled
/// method order.
pub async fn next_image(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Response> {
    let participant = state
        .store
        .find_participant(&user_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "User",
            id: user_id,
        })?;

    let Some(folder_id) = progress::next_folder(participant.last_voted, state.config.total_folders)
    else {
        return Ok(Json(CompleteResponse {
            status: "complete",
            message: "All images have been voted on",
        })
        .into_response());
    };

    // Fetched before assembly so a missing label aborts the whole response.
    let object_name = state.labels.object_name(folder_id).await?;

    let assignment = assignment::assemble(
        &state.config.asset_base_url,
        folder_id,
        object_name,
        state.shuffler.as_ref(),
    );

    Ok(Json(assignment).into_response())
}
