use thiserror::Error;

/// Errors from the participant store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Participant '{0}' is already registered")]
    AlreadyExists(String),

    #[error("Failed to connect to database: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Failed to deserialize stored row: {0}")]
    Deserialization(String),
}
