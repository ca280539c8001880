//! String-keyed persisted storage.
//!
//! [`KeyValueStore`] is the only thing the preference layer needs from the
//! platform. [`JsonFileStore`] keeps all entries in one JSON object on disk;
//! [`MemoryStore`] is for tests and ephemeral runs.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::errors::StorageError;

/// Minimal get/set string store.
pub trait KeyValueStore: Send {
    /// Read the value stored under `key`, or `None` if it was never set.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// All entries in a single JSON object file, written atomically.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(StorageError::Io { source: e }),
        };
        serde_json::from_str(&content).map_err(|e| StorageError::Corrupt {
            key: self.path.display().to_string(),
            message: e.to_string(),
        })
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = match self.read_all() {
            Ok(entries) => entries,
            Err(StorageError::Corrupt { message, .. }) => {
                tracing::warn!(
                    event = "core.preferences.store_corrupt_overwritten",
                    path = %self.path.display(),
                    error = %message,
                    "Preference file is corrupted - rewriting with the new entry"
                );
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        entries.insert(key.to_string(), value.to_string());

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        let content = serde_json::to_string_pretty(&entries).map_err(|e| StorageError::Io {
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        })?;
        let temp_file = self.path.with_extension("json.tmp");
        if let Err(e) = fs::write(&temp_file, &content) {
            cleanup_temp_file(&temp_file, &e);
            return Err(StorageError::Io { source: e });
        }
        if let Err(e) = fs::rename(&temp_file, &self.path) {
            cleanup_temp_file(&temp_file, &e);
            return Err(StorageError::Io { source: e });
        }
        Ok(())
    }
}

fn cleanup_temp_file(temp_file: &Path, original_error: &std::io::Error) {
    if let Err(cleanup_err) = fs::remove_file(temp_file)
        && cleanup_err.kind() != std::io::ErrorKind::NotFound
    {
        tracing::warn!(
            event = "core.preferences.temp_cleanup_failed",
            path = %temp_file.display(),
            original_error = %original_error,
            error = %cleanup_err,
        );
    }
}

/// In-memory store. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
