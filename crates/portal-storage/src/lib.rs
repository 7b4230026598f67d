//! Tutoring Portal Storage Layer
//!
//! Profile-scoped key-value storage backing every piece of portal state.
//! Values are opaque strings; callers own the encoding of their keys.

mod database;
mod error;
mod local;
mod memory;
mod migrations;

pub use database::Database;
pub use error::StorageError;
pub use local::{LocalStorage, DEFAULT_QUOTA_BYTES};
pub use memory::MemoryStorage;

pub type Result<T> = std::result::Result<T, StorageError>;
