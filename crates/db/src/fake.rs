use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;

use heatvote_core::types::FolderId;

use crate::error::StoreError;
use crate::models::Participant;
use crate::store::VoterStore;

/// In-memory implementation of [`VoterStore`] for tests.
#[derive(Default)]
pub struct FakeStore {
    participants: Arc<RwLock<HashMap<String, Participant>>>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a participant at an arbitrary progress point.
    pub fn fake_set_progress(&self, user_id: &str, last_voted: FolderId) {
        let mut participants = self.participants.write().unwrap();
        let entry = participants
            .entry(user_id.to_owned())
            .or_insert_with(|| Participant {
                user_id: user_id.to_owned(),
                created_at: Utc::now(),
                last_voted: 0,
                votes: Default::default(),
            });
        entry.last_voted = last_voted;
    }

    /// Read back a stored participant record.
    pub fn fake_participant(&self, user_id: &str) -> Option<Participant> {
        self.participants.read().unwrap().get(user_id).cloned()
    }
}

#[async_trait]
impl VoterStore for FakeStore {
    async fn find_participant(&self, user_id: &str) -> Result<Option<Participant>, StoreError> {
        Ok(self.participants.read().unwrap().get(user_id).cloned())
    }

    async fn insert_participant(&self, user_id: &str) -> Result<Participant, StoreError> {
        let mut participants = self.participants.write().unwrap();
        if participants.contains_key(user_id) {
            return Err(StoreError::AlreadyExists(user_id.to_owned()));
        }
        let participant = Participant {
            user_id: user_id.to_owned(),
            created_at: Utc::now(),
            last_voted: 0,
            votes: Default::default(),
        };
        participants.insert(user_id.to_owned(), participant.clone());
        Ok(participant)
    }

    async fn record_vote(
        &self,
        user_id: &str,
        folder_id: FolderId,
        method: &str,
    ) -> Result<bool, StoreError> {
        let mut participants = self.participants.write().unwrap();
        match participants.get_mut(user_id) {
            Some(p) if p.last_voted == folder_id - 1 => {
                p.votes.insert(folder_id.to_string(), method.to_owned());
                p.last_voted = folder_id;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_then_find_round_trips() {
        let store = FakeStore::new();
        let created = store.insert_participant("alice").await.unwrap();
        assert_eq!(created.last_voted, 0);
        assert!(created.votes.is_empty());

        let found = store.find_participant("alice").await.unwrap().unwrap();
        assert_eq!(found.user_id, "alice");
        assert_eq!(found.last_voted, 0);
    }

    #[tokio::test]
    async fn duplicate_insert_fails() {
        let store = FakeStore::new();
        store.insert_participant("alice").await.unwrap();

        let err = store.insert_participant("alice").await.unwrap_err();
        assert!(matches!(err, StoreError::AlreadyExists(id) if id == "alice"));
    }

    #[tokio::test]
    async fn find_unknown_returns_none() {
        let store = FakeStore::new();
        assert!(store.find_participant("ghost").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn vote_advances_pointer_and_stores_method() {
        let store = FakeStore::new();
        store.insert_participant("alice").await.unwrap();

        assert!(store.record_vote("alice", 1, "gradcam").await.unwrap());
        assert!(store.record_vote("alice", 2, "rollout").await.unwrap());

        let p = store.find_participant("alice").await.unwrap().unwrap();
        assert_eq!(p.last_voted, 2);
        assert_eq!(p.votes.get("1").map(String::as_str), Some("gradcam"));
        assert_eq!(p.votes.get("2").map(String::as_str), Some("rollout"));
    }

    #[tokio::test]
    async fn out_of_sequence_vote_is_not_applied() {
        let store = FakeStore::new();
        store.insert_participant("alice").await.unwrap();
        store.record_vote("alice", 1, "gradcam").await.unwrap();

        // Skip ahead and rewind both leave the record untouched.
        assert!(!store.record_vote("alice", 3, "our").await.unwrap());
        assert!(!store.record_vote("alice", 1, "our").await.unwrap());

        let p = store.find_participant("alice").await.unwrap().unwrap();
        assert_eq!(p.last_voted, 1);
        assert_eq!(p.votes.len(), 1);
    }

    #[tokio::test]
    async fn vote_for_missing_participant_is_not_applied() {
        let store = FakeStore::new();
        assert!(!store.record_vote("ghost", 1, "gradcam").await.unwrap());
    }
}
