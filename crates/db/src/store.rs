use async_trait::async_trait;

use heatvote_core::types::FolderId;

use crate::error::StoreError;
use crate::models::Participant;

/// Participant store interface: point lookups and point updates keyed by
/// `user_id`. No operation scans the collection, so contention scope is a
/// single row per call.
#[async_trait]
pub trait VoterStore: Send + Sync + 'static {
    /// Look up a participant by id.
    async fn find_participant(&self, user_id: &str) -> Result<Option<Participant>, StoreError>;

    /// Insert a fresh participant record (`last_voted = 0`, empty votes).
    ///
    /// Fails with [`StoreError::AlreadyExists`] if the id is taken.
    async fn insert_participant(&self, user_id: &str) -> Result<Participant, StoreError>;

    /// Record a vote: merge `folder_id -> method` into the votes mapping and
    /// advance `last_voted` to `folder_id`, in one atomic per-record update.
    ///
    /// The update applies only if the participant's current `last_voted`
    /// equals `folder_id - 1`; returns `false` when the record is missing or
    /// a concurrent vote got there first. Sequencing against stale reads is
    /// enforced here rather than in the handler so the read-then-vote window
    /// cannot corrupt the pointer.
    async fn record_vote(
        &self,
        user_id: &str,
        folder_id: FolderId,
        method: &str,
    ) -> Result<bool, StoreError>;

    /// Cheap connectivity probe for health reporting.
    async fn ping(&self) -> Result<(), StoreError>;
}
