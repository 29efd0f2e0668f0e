//! Client-local key/value storage.
//!
//! Each key is stored as one JSON file inside the data directory. Writes go
//! through a temporary file in the same directory and are renamed into place.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use log::{debug, error, info, trace};
use serde::{de::DeserializeOwned, Serialize};
use tempfile::NamedTempFile;

use crate::{FolioError, Result};

/// Directory-backed key/value store for small JSON records.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    dir: PathBuf,
}

impl LocalStorage {
    /// Opens (and creates if needed) the storage directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        if !dir.exists() {
            debug!("Storage directory does not exist, creating: {}", dir.display());
            fs::create_dir_all(&dir).map_err(|e| {
                error!("Failed to create storage directory: {}", e);
                FolioError::DirectoryError { path: dir.clone() }
            })?;
        }
        info!("Local storage opened at {}", dir.display());
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn item_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Returns the raw stored text for `key`, if any.
    pub fn get_raw(&self, key: &str) -> Result<Option<String>> {
        let path = self.item_path(key);
        if !path.exists() {
            trace!("No stored item for key: {}", key);
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(|e| {
            error!("Failed to read {}: {}", path.display(), e);
            FolioError::Io(e)
        })?;
        Ok(Some(content))
    }

    /// Reads and deserializes the item stored under `key`.
    pub fn get_item<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get_raw(key)? {
            Some(content) => Ok(Some(serde_json::from_str(&content)?)),
            None => Ok(None),
        }
    }

    /// Serializes `value` and stores it under `key`, replacing any previous value.
    pub fn set_item<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let path = self.item_path(key);
        debug!("Writing item {} to {}", key, path.display());

        let json = serde_json::to_string_pretty(value).map_err(|e| {
            error!("Failed to serialize item {}: {}", key, e);
            FolioError::Serialization(e)
        })?;

        let mut temp_file = NamedTempFile::new_in(&self.dir).map_err(|e| {
            error!("Failed to create temporary file: {}", e);
            FolioError::Io(e)
        })?;
        temp_file.write_all(json.as_bytes())?;
        temp_file.flush()?;

        temp_file.persist(&path).map_err(|e| {
            error!("Failed to persist file {}: {}", path.display(), e.error);
            FolioError::Io(e.error)
        })?;

        trace!("Item {} stored", key);
        Ok(())
    }

    /// Removes the item stored under `key`. Missing items are ignored.
    pub fn remove_item(&self, key: &str) -> Result<()> {
        let path = self.item_path(key);
        if path.exists() {
            fs::remove_file(&path)?;
            debug!("Removed item {}", key);
        }
        Ok(())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.item_path(key).exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::tempdir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Record {
        id: String,
        count: u32,
    }

    #[test]
    fn test_open_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let storage = LocalStorage::open(&nested).unwrap();
        assert!(nested.is_dir());
        assert_eq!(storage.dir(), nested.as_path());
    }

    #[test]
    fn test_set_get_remove() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::open(dir.path()).unwrap();
        let record = Record {
            id: "x".to_string(),
            count: 3,
        };

        storage.set_item("record", &record).unwrap();
        assert!(storage.contains("record"));
        assert_eq!(storage.get_item::<Record>("record").unwrap(), Some(record));

        storage.remove_item("record").unwrap();
        assert!(!storage.contains("record"));
        assert_eq!(storage.get_item::<Record>("record").unwrap(), None);
    }

    #[test]
    fn test_remove_missing_is_ok() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::open(dir.path()).unwrap();
        assert!(storage.remove_item("ghost").is_ok());
    }

    #[test]
    fn test_corrupted_item_is_serialization_error() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::open(dir.path()).unwrap();
        fs::write(dir.path().join("bad.json"), "{not json").unwrap();
        let result = storage.get_item::<Record>("bad");
        assert!(matches!(result, Err(FolioError::Serialization(_))));
    }
}
