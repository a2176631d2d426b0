//! Durable-storage boundary: `save(snapshot)` / `load() -> snapshot | empty`.
//!
//! Backends are deliberately dumb. Retry policy, last-write-wins and error
//! reporting live in the worker and the store, not here.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Context;
use thiserror::Error;

use stageprep_core::SessionId;

use crate::state::Snapshot;

/// Durable write/read failure. Non-fatal to the in-memory store.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("snapshot io error: {0}")]
    Io(String),
    #[error("snapshot encoding error: {0}")]
    Encode(String),
    #[error("snapshot decoding error: {0}")]
    Decode(String),
}

/// Storage collaborator for the store's snapshot.
pub trait SnapshotStore: Send + Sync {
    /// Overwrite the stored snapshot for its session.
    fn save(&self, snapshot: &Snapshot) -> Result<(), PersistenceError>;

    /// Load the snapshot scoped to `session`, or `None` when nothing (or
    /// another session's data) is stored.
    fn load(&self, session: &SessionId) -> Result<Option<Snapshot>, PersistenceError>;
}

/// Pretty-JSON snapshot on disk, written via temp-file-then-rename so a crash
/// mid-write never leaves a torn snapshot behind.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the default location: `{app_data_dir}/stageprep/snapshot.json`.
    pub fn at_default_path() -> Result<Self, PersistenceError> {
        let base = dirs::data_dir()
            .or_else(|| {
                dirs::home_dir().map(|mut h| {
                    h.push(".local");
                    h.push("share");
                    h
                })
            })
            .ok_or_else(|| {
                PersistenceError::Io("failed to resolve OS app data directory".to_string())
            })?;
        let mut path = base;
        path.push("stageprep");
        path.push("snapshot.json");
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_atomically(&self, payload: &[u8]) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create snapshot directory {parent:?}"))?;
        }
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, payload)
            .with_context(|| format!("failed to write snapshot temp file {tmp:?}"))?;
        std::fs::rename(&tmp, &self.path)
            .with_context(|| format!("failed to move snapshot into place at {:?}", self.path))?;
        Ok(())
    }
}

impl SnapshotStore for JsonFileStore {
    fn save(&self, snapshot: &Snapshot) -> Result<(), PersistenceError> {
        let payload = serde_json::to_vec_pretty(snapshot)
            .map_err(|err| PersistenceError::Encode(err.to_string()))?;
        self.write_atomically(&payload)
            .map_err(|err| PersistenceError::Io(format!("{err:#}")))
    }

    fn load(&self, session: &SessionId) -> Result<Option<Snapshot>, PersistenceError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(PersistenceError::Io(format!(
                    "failed to read snapshot at {:?}: {err}",
                    self.path
                )));
            }
        };
        let snapshot: Snapshot = serde_json::from_slice(&bytes)
            .map_err(|err| PersistenceError::Decode(err.to_string()))?;
        // A snapshot scoped to a different session is treated as absent.
        if snapshot.session != *session {
            return Ok(None);
        }
        Ok(Some(snapshot))
    }
}

/// In-memory backend for tests and development.
#[derive(Debug, Default)]
pub struct InMemorySnapshotStore {
    snapshots: RwLock<HashMap<SessionId, Snapshot>>,
    saves: AtomicUsize,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `save` calls; lets tests observe write coalescing.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn save(&self, snapshot: &Snapshot) -> Result<(), PersistenceError> {
        let mut snapshots = self
            .snapshots
            .write()
            .map_err(|_| PersistenceError::Io("lock poisoned".to_string()))?;
        snapshots.insert(snapshot.session, snapshot.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn load(&self, session: &SessionId) -> Result<Option<Snapshot>, PersistenceError> {
        let snapshots = self
            .snapshots
            .read()
            .map_err(|_| PersistenceError::Io("lock poisoned".to_string()))?;
        Ok(snapshots.get(session).cloned())
    }
}
