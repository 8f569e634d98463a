//! Key-value persistence
//!
//! A small string-to-string store standing in for the browser-local storage
//! the desktop shell persists into: one value per key, last write wins.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::{Error, Result};

/// Trait for key-value storage operations
pub trait KvStore: Send + Sync {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// File-backed store: one file per key inside a base directory
pub struct FileKvStore {
    dir: PathBuf,
}

impl FileKvStore {
    /// Open a store rooted at `dir`, creating the directory if needed
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        if !is_valid_key(key) {
            return Err(Error::Storage(format!("invalid storage key: {key:?}")));
        }
        Ok(self.dir.join(key))
    }
}

impl KvStore for FileKvStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let tmp = self.dir.join(format!("{key}.tmp"));
        write_atomic(&path, &tmp, value)
    }
}

/// In-memory store used as the degraded fallback and by tests
#[derive(Default)]
pub struct MemoryKvStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKvStore {
    /// Create an empty in-memory store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryKvStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| Error::Storage("kv store lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| Error::Storage("kv store lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Keys must be plain dotted identifiers so they map directly to file names.
fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_')
}

/// Write via a sibling temp file and rename so readers never see a torn value.
fn write_atomic(path: &Path, tmp: &Path, value: &str) -> Result<()> {
    std::fs::write(tmp, value)?;
    std::fs::rename(tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryKvStore::new();
        assert_eq!(store.get("mist.notes").unwrap(), None);

        store.set("mist.notes", "[]").unwrap();
        assert_eq!(store.get("mist.notes").unwrap().as_deref(), Some("[]"));

        store.set("mist.notes", "[1]").unwrap();
        assert_eq!(store.get("mist.notes").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn file_store_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKvStore::open(dir.path().join("mist")).unwrap();

        assert_eq!(store.get("mist.slider.volume").unwrap(), None);
        store.set("mist.slider.volume", "0.4").unwrap();
        assert_eq!(
            store.get("mist.slider.volume").unwrap().as_deref(),
            Some("0.4")
        );
    }

    #[test]
    fn file_store_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("mist");

        FileKvStore::open(&base)
            .unwrap()
            .set("mist.notes", "[42]")
            .unwrap();

        let reopened = FileKvStore::open(&base).unwrap();
        assert_eq!(reopened.get("mist.notes").unwrap().as_deref(), Some("[42]"));
    }

    #[test]
    fn file_store_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKvStore::open(dir.path()).unwrap();

        assert!(store.set("../escape", "x").is_err());
        assert!(store.get("a/b").is_err());
        assert!(store.set("", "x").is_err());
    }
}
