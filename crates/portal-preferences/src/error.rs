//! Preference error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreferenceError {
    #[error("Failed to save preference: {0}")]
    Storage(#[from] portal_storage::StorageError),
}
