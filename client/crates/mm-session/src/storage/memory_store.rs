use crate::{KeyValueStore, StorageError, StorageErrorResult};

use std::collections::HashMap;

/// In-process key-value store.
///
/// Optionally enforces a byte quota or refuses every operation, mirroring a
/// browser store that is full or switched off.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    quota: Option<usize>,
    disabled: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects writes that would push keys plus values above `bytes`.
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            quota: Some(bytes),
            ..Self::default()
        }
    }

    /// A store on which every operation fails.
    pub fn disabled() -> Self {
        Self {
            disabled: true,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn used_bytes_without(&self, key: &str) -> usize {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }

    fn check_enabled(&self) -> StorageErrorResult<()> {
        if self.disabled {
            return Err(StorageError::unavailable("storage is disabled"));
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageErrorResult<Option<String>> {
        self.check_enabled()?;
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageErrorResult<()> {
        self.check_enabled()?;

        if let Some(limit) = self.quota
            && self.used_bytes_without(key) + key.len() + value.len() > limit
        {
            return Err(StorageError::quota_exceeded(key, limit));
        }

        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageErrorResult<()> {
        self.check_enabled()?;
        self.entries.remove(key);
        Ok(())
    }

    fn clear(&mut self) -> StorageErrorResult<()> {
        self.check_enabled()?;
        self.entries.clear();
        Ok(())
    }
}
