//! Session error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(String),

    #[error("Failed to persist sessions: {0}")]
    Persistence(#[from] portal_storage::StorageError),

    #[error("Stored sessions are malformed: {0}")]
    MalformedData(#[source] serde_json::Error),

    #[error("JSON serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("Invalid {field}: {reason}")]
    InvalidField {
        field: &'static str,
        reason: &'static str,
    },
}
