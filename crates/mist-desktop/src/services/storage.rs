//! Storage service for the desktop shell
//!
//! Resolves the platform data directory and opens the file-backed key-value
//! store, degrading to an in-memory store when the directory is unusable.

use std::path::PathBuf;
use std::sync::Arc;

use mist_core::kv::{FileKvStore, KvStore, MemoryKvStore};

/// Open the default key-value store under the platform data directory.
///
/// Never fails: storage problems degrade to an in-memory store so the shell
/// stays usable for the session.
#[must_use]
pub fn open_default_kv() -> Arc<dyn KvStore> {
    let dir = default_data_dir();
    match FileKvStore::open(&dir) {
        Ok(store) => {
            tracing::info!("Using data directory {}", dir.display());
            Arc::new(store)
        }
        Err(e) => {
            tracing::warn!(
                "Data directory {} unavailable ({e}); falling back to in-memory storage",
                dir.display()
            );
            Arc::new(MemoryKvStore::new())
        }
    }
}

/// The default data directory for persisted state
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mist")
}
