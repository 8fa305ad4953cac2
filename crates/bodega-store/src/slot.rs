//! Durable slot backends.
//!
//! A slot is a single named entry in a key-value store holding the
//! serialized cart. Backends only move strings; (de)serialization happens
//! in [`crate::store::CartStore`].

use crate::error::StoreError;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// A key-value backend holding string payloads.
///
/// Writes are full-payload overwrites; the last writer wins.
pub trait SlotBackend {
    /// Read the payload under `key`. Returns `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite the payload under `key`.
    fn set(&self, key: &str, payload: &str) -> Result<(), StoreError>;

    /// Remove `key`. Removing an absent key is a no-op.
    fn delete(&self, key: &str) -> Result<(), StoreError>;
}

/// In-memory slot backend.
///
/// Clones share the same underlying map, the way several browser tabs share
/// one profile's storage; two stores opened over clones of the same
/// `MemorySlot` observe each other's writes on re-hydration.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySlot {
    /// Create an empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StoreError> {
        self.entries
            .lock()
            .map_err(|_| StoreError::Backend("slot lock poisoned".to_string()))
    }
}

impl SlotBackend for MemorySlot {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, payload: &str) -> Result<(), StoreError> {
        self.lock()?.insert(key.to_string(), payload.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

/// File-backed slot backend: one JSON file per key under a directory.
#[derive(Debug, Clone)]
pub struct FileSlot {
    dir: PathBuf,
}

impl FileSlot {
    /// Open a backend rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StoreError::Open(e.to_string()))?;
        Ok(Self { dir })
    }

    /// The directory this backend stores files under.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SlotBackend for FileSlot {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Backend(e.to_string())),
        }
    }

    fn set(&self, key: &str, payload: &str) -> Result<(), StoreError> {
        fs::write(self.path_for(key), payload).map_err(|e| StoreError::Backend(e.to_string()))
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Backend(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_slot_roundtrip() {
        let slot = MemorySlot::new();
        assert!(slot.get("cart").unwrap().is_none());

        slot.set("cart", "[]").unwrap();
        assert_eq!(slot.get("cart").unwrap().as_deref(), Some("[]"));

        slot.delete("cart").unwrap();
        assert!(slot.get("cart").unwrap().is_none());
    }

    #[test]
    fn test_memory_slot_clones_share_entries() {
        let a = MemorySlot::new();
        let b = a.clone();

        a.set("cart", "[1]").unwrap();
        assert_eq!(b.get("cart").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_file_slot_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::open(dir.path()).unwrap();

        assert!(slot.get("cart").unwrap().is_none());
        slot.set("cart", r#"[{"name":"A"}]"#).unwrap();
        assert_eq!(
            slot.get("cart").unwrap().as_deref(),
            Some(r#"[{"name":"A"}]"#)
        );

        slot.delete("cart").unwrap();
        assert!(slot.get("cart").unwrap().is_none());
        // Deleting again stays a no-op.
        slot.delete("cart").unwrap();
    }

    #[test]
    fn test_file_slot_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("data").join("slots");
        let slot = FileSlot::open(&nested).unwrap();

        slot.set("cart", "[]").unwrap();
        assert!(nested.join("cart.json").exists());
    }
}
