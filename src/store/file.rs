//! File-backed key/value storage.
//!
//! Each key maps to `<dir>/<key>.json`. Writes use the temp-file-then-rename
//! pattern:
//! 1. Write to `<key>.json.tmp.<timestamp>`
//! 2. Fsync to disk
//! 3. Rename over the target (atomic on the same filesystem)
//!
//! If the rename fails the temp file is kept as a safety copy and its path is
//! reported in [`PersistenceError::WriteAtomic`].

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Local;

use super::KeyValueBackend;
use crate::config::xdg;
use crate::error::PersistenceError;

/// Stores one JSON document per key inside a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Uses `dir` for storage. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Storage in the platform data directory (see [`xdg::layouts_dir`]).
    pub fn in_data_dir() -> Self {
        Self::new(xdg::layouts_dir())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File that holds `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, PersistenceError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

/// Keys become file names, so only a conservative character set is allowed.
fn validate_key(key: &str) -> Result<(), PersistenceError> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
    if valid {
        Ok(())
    } else {
        Err(PersistenceError::InvalidKey {
            key: key.to_string(),
        })
    }
}

impl KeyValueBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PersistenceError::Io {
                key: key.to_string(),
                path,
                source: e,
            }),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let path = self.path_for(key)?;
        let io_err = |path: &Path| {
            let key = key.to_string();
            let path = path.to_path_buf();
            move |source: std::io::Error| PersistenceError::Io { key, path, source }
        };

        xdg::ensure_dir(&self.dir).map_err(io_err(&self.dir))?;

        let timestamp = Local::now().format("%Y%m%d-%H%M%S%.3f").to_string();
        let temp_path = path.with_file_name(format!("{key}.json.tmp.{timestamp}"));

        fs::write(&temp_path, value).map_err(io_err(&temp_path))?;

        let file = fs::File::open(&temp_path).map_err(io_err(&temp_path))?;
        file.sync_all().map_err(io_err(&temp_path))?;

        fs::rename(&temp_path, &path).map_err(|_| PersistenceError::WriteAtomic {
            path: path.clone(),
            temp_path: temp_path.clone(),
        })?;

        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PersistenceError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PersistenceError::Io {
                key: key.to_string(),
                path,
                source: e,
            }),
        }
    }
}
