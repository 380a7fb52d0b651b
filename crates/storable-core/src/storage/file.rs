//! JSON-file storage backend.
//!
//! The whole key space is held in memory and written back to disk after every
//! mutation through a temp file that is renamed over the store file. Where
//! `rename` replaces an existing target in one step (POSIX filesystems), a
//! crash leaves either the old or the new file. Where it refuses to
//! overwrite, the old file is removed before the retry, and a crash in that
//! window leaves no store file; the next `open` then sees an empty store.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::{Result, StorableError};
use crate::storage::traits::KeyValueStore;

/// File-backed store persisting a flat `key -> text` JSON object.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`.
    ///
    /// A missing file is an empty store; the file is created on first write.
    ///
    /// # Errors
    ///
    /// Returns `StorableError::Storage` if the file exists but cannot be read
    /// or does not contain a JSON object of strings.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let items = match fs::read(&path) {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => BTreeMap::new(),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                StorableError::Storage(format!("Corrupt store file {}: {}", path.display(), e))
            })?,
            Err(err) if err.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => {
                return Err(StorableError::Storage(format!(
                    "Failed to read store file {}: {}",
                    path.display(),
                    err
                )))
            }
        };
        debug!(path = %path.display(), entries = items.len(), "opened file store");
        Ok(Self { path, items })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        let data = serde_json::to_vec_pretty(&self.items)
            .map_err(|e| StorableError::Storage(format!("Store encode failed: {}", e)))?;
        crate::fs::write_atomic(&self.path, &data).map_err(|e| {
            StorableError::Storage(format!(
                "Failed to write store file {}: {}",
                self.path.display(),
                e
            ))
        })?;
        trace!(path = %self.path.display(), bytes = data.len(), "flushed file store");
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        let previous = self.items.insert(key.to_string(), value);
        if let Err(err) = self.flush() {
            // Keep memory consistent with what is on disk.
            match previous {
                Some(old) => self.items.insert(key.to_string(), old),
                None => self.items.remove(key),
            };
            return Err(err);
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        let Some(old) = self.items.remove(key) else {
            return Ok(false);
        };
        if let Err(err) = self.flush() {
            self.items.insert(key.to_string(), old);
            return Err(err);
        }
        Ok(true)
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.items.keys().cloned().collect())
    }
}
