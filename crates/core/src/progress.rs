//! Per-participant progress arithmetic.
//!
//! Progress is a single monotonically advancing pointer: `last_voted`, the
//! highest folder the participant has voted on (`0` = none yet). The next
//! folder to serve is always `last_voted + 1`; once that exceeds the catalog
//! size the participant is in the terminal "complete" state.
//!
//! Votes must target exactly `last_voted + 1`. The server derives the target
//! rather than trusting the client's claimed folder id, so a buggy or
//! malicious client cannot skip ahead or rewind the sequence.

use crate::error::CoreError;
use crate::types::FolderId;

/// Compute the next folder for a participant, or `None` when every folder in
/// the catalog has been voted on.
pub fn next_folder(last_voted: FolderId, total_folders: FolderId) -> Option<FolderId> {
    if last_voted >= total_folders {
        None
    } else {
        Some(last_voted + 1)
    }
}

/// Validate that a submitted vote targets the one acceptable folder.
///
/// Accepts only `folder_id == last_voted + 1`, and only while that folder is
/// inside the catalog. Everything else (skips, rewinds, re-votes, votes past
/// the end) is a validation failure.
pub fn validate_vote_target(
    last_voted: FolderId,
    folder_id: FolderId,
    total_folders: FolderId,
) -> Result<(), CoreError> {
    match next_folder(last_voted, total_folders) {
        Some(expected) if folder_id == expected => Ok(()),
        Some(expected) => Err(CoreError::Validation(format!(
            "Vote must target folder {expected}, got {folder_id}"
        ))),
        None => Err(CoreError::Validation(format!(
            "All {total_folders} folders have been voted on"
        ))),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
