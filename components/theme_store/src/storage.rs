//! File-backed string key-value storage, the local-storage analog.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading or writing the preference file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The preference file could not be read or written.
    #[error("preference file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The preference file exists but is not a JSON string map.
    #[error("preference file is not a JSON string map: {0}")]
    Format(#[from] serde_json::Error),
}

/// A persisted string→string map backed by one JSON file.
///
/// The whole map is loaded at open and rewritten on every `set`.
#[derive(Debug)]
pub struct PreferenceStorage {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl PreferenceStorage {
    /// Opens the store at `path`, loading the map if the file exists.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let values = if path.exists() {
            serde_json::from_str(&fs::read_to_string(&path)?)?
        } else {
            HashMap::new()
        };
        Ok(Self { path, values })
    }

    /// Returns the stored value for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Stores `value` under `key` and rewrites the file.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&self.values)?)?;
        Ok(())
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}
