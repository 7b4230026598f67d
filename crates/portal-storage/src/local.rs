//! The key-value surface shared by all backends

use crate::error::StorageError;
use crate::Result;

/// Browser local storage allows roughly five megabytes per origin.
pub const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

/// A string-keyed, string-valued store scoped to one user profile.
///
/// Every call runs to completion before returning. Implementations must leave
/// the previous value untouched when a write is rejected.
pub trait LocalStorage: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;

    /// All keys currently stored, in ascending order.
    fn keys(&self) -> Result<Vec<String>>;

    /// Remove every key.
    fn clear(&self) -> Result<()>;
}

/// Size an entry is charged against the quota.
pub(crate) fn entry_size(key: &str, value: &str) -> usize {
    key.len() + value.len()
}

pub(crate) fn check_quota(used_by_others: usize, key: &str, value: &str, quota: usize) -> Result<()> {
    let requested = used_by_others + entry_size(key, value);
    if requested > quota {
        tracing::warn!(key = %key, requested, quota, "Rejected write over storage quota");
        return Err(StorageError::QuotaExceeded { requested, quota });
    }
    Ok(())
}
