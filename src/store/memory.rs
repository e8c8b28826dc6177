//! In-process key/value backend with an optional byte quota.

use std::collections::HashMap;

use super::KeyValueBackend;
use crate::error::PersistenceError;

/// Map-backed storage, optionally capped like browser local storage.
///
/// The quota counts the bytes of every stored key and value. A write that
/// would exceed it fails with [`PersistenceError::QuotaExceeded`] and leaves
/// the previous value in place.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryBackend {
    /// Creates an unbounded backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend holding at most `quota` bytes.
    pub fn with_quota(quota: usize) -> Self {
        Self {
            entries: HashMap::new(),
            quota: Some(quota),
        }
    }

    /// Bytes currently stored (keys plus values).
    pub fn used_bytes(&self) -> usize {
        self.entries.iter().map(|(k, v)| k.len() + v.len()).sum()
    }

    pub fn quota(&self) -> Option<usize> {
        self.quota
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        if let Some(quota) = self.quota {
            let replaced = self.entries.get(key).map_or(0, |v| key.len() + v.len());
            let required = self.used_bytes() - replaced + key.len() + value.len();
            if required > quota {
                return Err(PersistenceError::QuotaExceeded {
                    key: key.to_string(),
                    required,
                    quota,
                });
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PersistenceError> {
        self.entries.remove(key);
        Ok(())
    }
}
