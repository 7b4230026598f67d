//! Core error types

use thiserror::Error;

use portal_sessions::DraftError;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] portal_storage::StorageError),

    #[error("Session error: {0}")]
    Session(#[from] portal_sessions::SessionError),

    #[error("Preference error: {0}")]
    Preference(#[from] portal_preferences::PreferenceError),

    #[error("Invalid session draft: {}", describe(.0))]
    InvalidDraft(Vec<DraftError>),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

fn describe(errors: &[DraftError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

// Directory creation is the only filesystem work done outside SQLite
impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::Config(e.to_string())
    }
}
