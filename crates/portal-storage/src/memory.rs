//! In-process local storage

use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::StorageError;
use crate::local::{check_quota, entry_size, LocalStorage, DEFAULT_QUOTA_BYTES};
use crate::Result;

/// Map-backed storage that lives as long as the process.
///
/// Clones share the same map. `set_unavailable(true)` makes every call fail,
/// which is how a disabled or security-restricted store behaves.
#[derive(Clone)]
pub struct MemoryStorage {
    items: Arc<RwLock<BTreeMap<String, String>>>,
    unavailable: Arc<RwLock<bool>>,
    quota: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::with_quota(DEFAULT_QUOTA_BYTES)
    }

    pub fn with_quota(quota: usize) -> Self {
        Self {
            items: Arc::new(RwLock::new(BTreeMap::new())),
            unavailable: Arc::new(RwLock::new(false)),
            quota,
        }
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        *self.unavailable.write() = unavailable;
    }

    /// Bytes currently charged against the quota.
    pub fn used_bytes(&self) -> usize {
        self.items
            .read()
            .iter()
            .map(|(k, v)| entry_size(k, v))
            .sum()
    }

    fn ensure_available(&self) -> Result<()> {
        if *self.unavailable.read() {
            return Err(StorageError::Unavailable(
                "local storage is disabled".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.ensure_available()?;
        Ok(self.items.read().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_available()?;

        let mut items = self.items.write();
        let used_by_others: usize = items
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| entry_size(k, v))
            .sum();
        check_quota(used_by_others, key, value, self.quota)?;

        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.ensure_available()?;
        self.items.write().remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        self.ensure_available()?;
        Ok(self.items.read().keys().cloned().collect())
    }

    fn clear(&self) -> Result<()> {
        self.ensure_available()?;
        self.items.write().clear();
        Ok(())
    }
}
