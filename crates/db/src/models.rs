//! Participant record as stored in the `participants` table.

use std::collections::BTreeMap;

use heatvote_core::types::{FolderId, Timestamp};

/// One survey participant.
///
/// `votes` maps folder index (as a string key, matching its JSONB storage)
/// to the chosen method name. `last_voted` is the progress pointer: the
/// highest folder voted on, `0` for a fresh registration.
#[derive(Debug, Clone)]
pub struct Participant {
    pub user_id: String,
    pub created_at: Timestamp,
    pub last_voted: FolderId,
    pub votes: BTreeMap<String, String>,
}
