//! Resume checkpoint persistence.
//!
//! The checkpoint is the ID of the newest saved post seen when the previous
//! crawl started. It is read once at the start of a crawl to know where to
//! stop, and overwritten once, as soon as the first post of the new crawl
//! is seen.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Store key holding the last downloaded post ID.
pub const CHECKPOINT_KEY: &str = "last_downloaded";

/// Process-wide key/value store that survives across runs.
pub trait CheckpointStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store already holding `value` under the checkpoint key.
    pub fn with_checkpoint(value: &str) -> Self {
        let store = Self::new();
        store
            .lock()
            .insert(CHECKPOINT_KEY.to_string(), value.to_string());
        store
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.values.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl CheckpointStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    entries: HashMap<String, StoreEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoreEntry {
    value: String,
    updated_at: DateTime<Utc>,
}

/// JSON file store. Every `set` rewrites the file through a temp file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<StoreFile> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(StoreFile::default()),
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                Error::Config(format!(
                    "Checkpoint file {} is corrupt: {}",
                    self.path.display(),
                    e
                ))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(StoreFile::default()),
            Err(e) => Err(Error::Io(e)),
        }
    }
}

impl CheckpointStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read()?.entries.remove(key).map(|entry| entry.value))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut file = self.read()?;
        file.entries.insert(
            key.to_string(),
            StoreEntry {
                value: value.to_string(),
                updated_at: Utc::now(),
            },
        );

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(&file)?)?;
        fs::rename(&tmp, &self.path)?;

        tracing::debug!("Stored {}={} in {}", key, value, self.path.display());
        Ok(())
    }
}

/// Checkpoint state threaded through one crawl.
pub struct RunContext<'a> {
    store: &'a dyn CheckpointStore,
    stop_at: Option<String>,
    advanced_to: Option<String>,
}

impl<'a> RunContext<'a> {
    /// Read the stored checkpoint. An empty value means no checkpoint.
    pub fn load(store: &'a dyn CheckpointStore) -> Result<Self> {
        let stop_at = store.get(CHECKPOINT_KEY)?.filter(|id| !id.is_empty());
        Ok(Self {
            store,
            stop_at,
            advanced_to: None,
        })
    }

    /// Start without a stop boundary, ignoring any stored checkpoint.
    pub fn fresh(store: &'a dyn CheckpointStore) -> Self {
        Self {
            store,
            stop_at: None,
            advanced_to: None,
        }
    }

    /// Post ID at which the crawl stops.
    pub fn stop_at(&self) -> Option<&str> {
        self.stop_at.as_deref()
    }

    /// The ID written during this run, if any.
    pub fn advanced_to(&self) -> Option<&str> {
        self.advanced_to.as_deref()
    }

    /// Persist `id` as the new checkpoint. Only the first call per run writes.
    pub fn advance(&mut self, id: &str) -> Result<()> {
        if self.advanced_to.is_some() {
            return Ok(());
        }

        self.store.set(CHECKPOINT_KEY, id)?;
        self.advanced_to = Some(id.to_string());
        tracing::info!("Checkpoint advanced to {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_json_store_round_trip_and_persistence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("checkpoint.json");

        let store = JsonFileStore::new(&path);
        assert_eq!(store.get(CHECKPOINT_KEY).unwrap(), None);
        assert_ok!(store.set(CHECKPOINT_KEY, "t3_first"));
        assert_ok!(store.set("other", "value"));

        let reopened = JsonFileStore::new(&path);
        assert_eq!(
            reopened.get(CHECKPOINT_KEY).unwrap().as_deref(),
            Some("t3_first")
        );
        assert_eq!(reopened.get("other").unwrap().as_deref(), Some("value"));
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_json_store_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("checkpoint.json");
        fs::write(&path, "{not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert_err!(store.get(CHECKPOINT_KEY));
    }

    #[test]
    fn test_run_context_empty_value_is_no_checkpoint() {
        let store = MemoryStore::with_checkpoint("");
        let ctx = RunContext::load(&store).unwrap();
        assert_eq!(ctx.stop_at(), None);
    }

    #[test]
    fn test_run_context_advances_once() {
        let store = MemoryStore::with_checkpoint("t3_old");
        let mut ctx = RunContext::load(&store).unwrap();
        assert_eq!(ctx.stop_at(), Some("t3_old"));

        ctx.advance("t3_new").unwrap();
        ctx.advance("t3_newer").unwrap();

        assert_eq!(ctx.advanced_to(), Some("t3_new"));
        assert_eq!(ctx.stop_at(), Some("t3_old"));
        assert_eq!(
            store.get(CHECKPOINT_KEY).unwrap().as_deref(),
            Some("t3_new")
        );
    }

    #[test]
    fn test_run_context_fresh_ignores_stored_value() {
        let store = MemoryStore::with_checkpoint("t3_old");
        let ctx = RunContext::fresh(&store);
        assert_eq!(ctx.stop_at(), None);
    }
}
