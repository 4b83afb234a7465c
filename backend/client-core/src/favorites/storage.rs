//! Client-local key-value string storage.
//!
//! Modeled on a browser origin's `localStorage`: one flat map of string keys
//! to string values. The favorites store is generic over this trait so tests
//! can inject an in-memory map or a deliberately broken backend.

use crate::error::storage::StorageError;

use common::ErrorLocation;

use std::collections::BTreeMap;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use log::{debug, warn};

const STORAGE_FILE_NAME: &str = "local_storage.json";

pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}

// ============================================
// IN-MEMORY
// ============================================

/// Process-local storage; contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self.items.read().map_err(|e| StorageError::Unavailable {
            message: format!("Memory store lock poisoned: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.items.write().map_err(|e| StorageError::Unavailable {
            message: format!("Memory store lock poisoned: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ============================================
// FILE-BACKED
// ============================================

/// Storage persisted as a single JSON object file in a data directory.
///
/// Every `set_item` rewrites the whole file through a temp file + rename so a
/// crash never leaves a half-written map behind.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(STORAGE_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let contents =
            std::fs::read_to_string(&self.path).map_err(|e| StorageError::io(&self.path, e))?;

        serde_json::from_str(&contents).map_err(|e| StorageError::Corrupt {
            key: self.path.display().to_string(),
            reason: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    fn write_all(&self, items: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let dir = self.path.parent().ok_or_else(|| StorageError::Unavailable {
            message: format!("Storage path has no parent: {}", self.path.display()),
            location: ErrorLocation::from(Location::caller()),
        })?;

        std::fs::create_dir_all(dir).map_err(|e| StorageError::io(dir, e))?;

        let json = serde_json::to_string_pretty(items).map_err(|e| StorageError::Unavailable {
            message: format!("Failed to serialize storage: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let temp_path = dir.join(format!("{STORAGE_FILE_NAME}.tmp"));
        std::fs::write(&temp_path, json).map_err(|e| StorageError::io(&temp_path, e))?;
        std::fs::rename(&temp_path, &self.path).map_err(|e| StorageError::io(&self.path, e))?;

        debug!("Storage written to {}", self.path.display());
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // A corrupt file is replaced rather than blocking every future write.
        let mut items = match self.read_all() {
            Ok(items) => items,
            Err(e @ StorageError::Corrupt { .. }) => {
                warn!("Replacing corrupt storage file: {e}");
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        items.insert(key.to_string(), value.to_string());
        self.write_all(&items)
    }
}
