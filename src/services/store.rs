//! Local key-value storage.
//!
//! One JSON object file (`storage.json`) maps keys to JSON values. The file
//! is read once when the store is opened and rewritten after every change.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File name of the store inside its data directory.
pub const STORAGE_FILE: &str = "storage.json";

/// Persistent string-keyed JSON values.
#[derive(Debug, Clone)]
pub struct KeyValueStore {
    path: PathBuf,
    entries: Map<String, Value>,
}

impl KeyValueStore {
    /// Opens the store in `dir`. A missing file gives an empty store.
    ///
    /// A file that is not a JSON object is reported as an error and left
    /// untouched.
    pub fn open(dir: &Path) -> Result<Self> {
        let path = dir.join(STORAGE_FILE);
        if !path.exists() {
            debug!(path = %path.display(), "storage file missing, starting empty");
            return Ok(Self {
                path,
                entries: Map::new(),
            });
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read storage file: {}", path.display()))?;
        let value: Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse storage file: {}", path.display()))?;
        let Value::Object(entries) = value else {
            anyhow::bail!(
                "Storage file {} does not contain a JSON object",
                path.display()
            );
        };

        debug!(path = %path.display(), keys = entries.len(), "storage loaded");
        Ok(Self { path, entries })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True when `key` holds a value.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Reads and deserializes a value.
    ///
    /// A value of the wrong shape is logged and treated as absent.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.entries.get(key)?;
        match serde_json::from_value(value.clone()) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                warn!(key, error = %e, "ignoring stored value with unexpected shape");
                None
            }
        }
    }

    /// Stores a value and persists the store.
    pub fn set<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<()> {
        let value = serde_json::to_value(value)
            .with_context(|| format!("Failed to serialize value for key '{key}'"))?;
        self.entries.insert(key.to_string(), value);
        self.persist()
    }

    /// Removes a value and persists the store. Returns whether it existed.
    pub fn remove(&mut self, key: &str) -> Result<bool> {
        if self.entries.remove(key).is_none() {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Writes the store using temp file + rename.
    fn persist(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create data directory: {}", dir.display()))?;
        }

        let content = serde_json::to_string_pretty(&self.entries)
            .context("Failed to serialize storage")?;
        let temp_path = self.path.with_extension("json.tmp");

        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write temp storage file: {}", temp_path.display())
        })?;
        fs::rename(&temp_path, &self.path).with_context(|| {
            format!("Failed to rename temp storage file to: {}", self.path.display())
        })?;

        debug!(path = %self.path.display(), "storage saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_missing_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = KeyValueStore::open(dir.path()).unwrap();
        assert!(!store.contains("todos"));
        assert!(!store.path().exists());
    }

    #[test]
    fn test_set_persists_and_reopens() {
        let dir = TempDir::new().unwrap();
        let mut store = KeyValueStore::open(dir.path()).unwrap();
        store.set("theme", "light").unwrap();
        store.set("favorites", &["base64", "uuid-generator"]).unwrap();
        assert!(!dir.path().join("storage.json.tmp").exists());

        let reopened = KeyValueStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get::<String>("theme").as_deref(), Some("light"));
        assert_eq!(
            reopened.get::<Vec<String>>("favorites").unwrap(),
            ["base64", "uuid-generator"]
        );
    }

    #[test]
    fn test_remove() {
        let dir = TempDir::new().unwrap();
        let mut store = KeyValueStore::open(dir.path()).unwrap();
        store.set("language", "ar").unwrap();
        assert!(store.remove("language").unwrap());
        assert!(!store.remove("language").unwrap());

        let reopened = KeyValueStore::open(dir.path()).unwrap();
        assert!(!reopened.contains("language"));
    }

    #[test]
    fn test_wrong_shape_is_absent() {
        let dir = TempDir::new().unwrap();
        let mut store = KeyValueStore::open(dir.path()).unwrap();
        store.set("favorites", &42).unwrap();
        assert_eq!(store.get::<Vec<String>>("favorites"), None);
        assert!(store.contains("favorites"));
    }

    #[test]
    fn test_non_object_file_is_error_and_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(STORAGE_FILE);
        fs::write(&path, "[1, 2, 3]").unwrap();

        assert!(KeyValueStore::open(dir.path()).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "[1, 2, 3]");
    }

    #[test]
    fn test_invalid_json_is_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(STORAGE_FILE), "{ not json").unwrap();
        assert!(KeyValueStore::open(dir.path()).is_err());
    }
}
