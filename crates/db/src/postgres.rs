use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;
use sqlx::{PgPool, Row};
use tracing::{debug, error, info};

use heatvote_core::types::FolderId;

use crate::error::StoreError;
use crate::models::Participant;
use crate::store::VoterStore;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "user_id, created_at, last_voted, votes";

/// PostgreSQL implementation of [`VoterStore`].
///
/// One row per participant; the votes mapping is an embedded JSONB document
/// so "record method + advance pointer" is a single-row atomic update.
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Connect to the database and make sure the schema exists.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .acquire_timeout(Duration::from_secs(10))
            .connect(database_url)
            .await
            .map_err(|e| {
                error!("Failed to create connection pool: {}", e);
                StoreError::Connection(e.to_string())
            })?;

        let store = PostgresStore { pool };
        store.ensure_schema().await?;

        info!("PostgreSQL participant store ready");
        Ok(store)
    }

    async fn ensure_schema(&self) -> Result<(), StoreError> {
        debug!("Ensuring participants table exists");
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS participants (
                user_id    TEXT PRIMARY KEY,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
                last_voted BIGINT NOT NULL DEFAULT 0,
                votes      JSONB NOT NULL DEFAULT '{}'::jsonb
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Query(e.to_string()))?;
        Ok(())
    }

    fn participant_from_row(row: &sqlx::postgres::PgRow) -> Result<Participant, StoreError> {
        let votes: Json<BTreeMap<String, String>> = row
            .try_get("votes")
            .map_err(|e| StoreError::Deserialization(e.to_string()))?;

        Ok(Participant {
            user_id: row
                .try_get("user_id")
                .map_err(|e| StoreError::Deserialization(e.to_string()))?,
            created_at: row
                .try_get("created_at")
                .map_err(|e| StoreError::Deserialization(e.to_string()))?,
            last_voted: row
                .try_get("last_voted")
                .map_err(|e| StoreError::Deserialization(e.to_string()))?,
            votes: votes.0,
        })
    }
}

#[async_trait]
impl VoterStore for PostgresStore {
    async fn find_participant(&self, user_id: &str) -> Result<Option<Participant>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM participants WHERE user_id = $1");
        let row = sqlx::query(&query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        row.map(|r| Self::participant_from_row(&r)).transpose()
    }

    async fn insert_participant(&self, user_id: &str) -> Result<Participant, StoreError> {
        // ON CONFLICT DO NOTHING keeps duplicate detection race-free: a lost
        // insert surfaces as "no row returned" rather than a unique violation.
        let query = format!(
            "INSERT INTO participants (user_id) VALUES ($1)
             ON CONFLICT (user_id) DO NOTHING
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query(&query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        match row {
            Some(r) => Self::participant_from_row(&r),
            None => Err(StoreError::AlreadyExists(user_id.to_owned())),
        }
    }

    async fn record_vote(
        &self,
        user_id: &str,
        folder_id: FolderId,
        method: &str,
    ) -> Result<bool, StoreError> {
        // The `last_voted = $4 - 1` guard makes the sequence check part of
        // the atomic update: a concurrent vote for the same participant
        // leaves rows_affected at 0 instead of rewinding the pointer.
        let result = sqlx::query(
            "UPDATE participants
                SET votes = votes || jsonb_build_object($2::text, $3::text),
                    last_voted = $4
              WHERE user_id = $1
                AND last_voted = $4 - 1",
        )
        .bind(user_id)
        .bind(folder_id.to_string())
        .bind(method)
        .bind(folder_id)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Query(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        Ok(())
    }
}
