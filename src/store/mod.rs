//! Layout persistence over a key/value backend.
//!
//! [`LayoutStore`] serializes a [`Layout`] as a versioned [`LayoutSet`] and
//! writes it through a [`KeyValueBackend`]. Two backends are provided:
//! [`MemoryBackend`] (in-process, optional byte quota) and [`FileBackend`]
//! (one JSON file per key, written atomically).
//!
//! # Failure semantics
//!
//! - `load` never fails. A missing key, unreadable data, malformed JSON or an
//!   unknown schema version all yield the caller's default layout; everything
//!   except the missing key is logged at warn level.
//! - `save` and `reset` propagate backend failures as [`PersistenceError`],
//!   so the caller can tell when memory and storage have diverged.

mod file;
mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;

use crate::error::PersistenceError;
use crate::layout::{Layout, LayoutSet, SCHEMA_VERSION};

/// A durable string key/value medium.
pub trait KeyValueBackend {
    /// Reads the value stored under `key`, or `None` if absent.
    fn read(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn write(&mut self, key: &str, value: &str) -> Result<(), PersistenceError>;

    /// Removes `key`. Removing an absent key succeeds.
    fn remove(&mut self, key: &str) -> Result<(), PersistenceError>;
}

/// Reasons a stored value was discarded in favour of the default.
#[derive(Debug)]
enum Discarded {
    Unreadable(PersistenceError),
    Malformed(serde_json::Error),
    UnsupportedVersion(u32),
}

impl std::fmt::Display for Discarded {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Discarded::Unreadable(e) => write!(f, "unreadable: {}", e),
            Discarded::Malformed(e) => write!(f, "malformed: {}", e),
            Discarded::UnsupportedVersion(v) => write!(f, "unsupported schema version {}", v),
        }
    }
}

/// Loads, saves and resets layouts through a backend.
#[derive(Debug, Clone, Default)]
pub struct LayoutStore<B> {
    backend: B,
}

impl<B: KeyValueBackend> LayoutStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Loads the layout stored under `key`, or returns `default`.
    pub fn load(&self, key: &str, default: Layout) -> Layout {
        match self.read_set(key) {
            Ok(Some(set)) => {
                tracing::debug!("Loaded layout '{}' (schema v{})", key, set.version);
                set.into_layout()
            }
            Ok(None) => {
                tracing::debug!("No stored layout for '{}', using default", key);
                default
            }
            Err(reason) => {
                tracing::warn!("Discarding stored layout '{}': {}", key, reason);
                default
            }
        }
    }

    /// Serializes `layout` and writes it under `key`.
    pub fn save(&mut self, key: &str, layout: &Layout) -> Result<(), PersistenceError> {
        let json = LayoutSet::new(key, layout.clone()).to_json()?;
        self.backend.write(key, &json)?;
        tracing::debug!("Saved layout '{}' ({} bytes)", key, json.len());
        Ok(())
    }

    /// Clears `key` and returns `default`.
    pub fn reset(&mut self, key: &str, default: Layout) -> Result<Layout, PersistenceError> {
        self.backend.remove(key)?;
        tracing::info!("Reset layout '{}' to default", key);
        Ok(default)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    fn read_set(&self, key: &str) -> Result<Option<LayoutSet>, Discarded> {
        let Some(raw) = self.backend.read(key).map_err(Discarded::Unreadable)? else {
            return Ok(None);
        };
        let set: LayoutSet = serde_json::from_str(&raw).map_err(Discarded::Malformed)?;
        if set.version != SCHEMA_VERSION {
            return Err(Discarded::UnsupportedVersion(set.version));
        }
        Ok(Some(set))
    }
}
