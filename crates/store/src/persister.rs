//! Detached persistence worker.
//!
//! The store publishes every committed snapshot to a watch channel; this
//! worker drains it and writes the **latest** value. Snapshots superseded
//! while a save is in flight are never written (last-snapshot-wins), and a
//! failed save is logged and skipped; the in-memory state stays the source
//! of truth and the next save carries the newest snapshot.

use std::sync::Arc;

use tokio::sync::watch;

use crate::persistence::SnapshotStore;
use crate::state::Snapshot;

/// Spawn the background worker. It stops once the store (the sender) is
/// dropped.
pub fn spawn_persister(
    backend: Arc<dyn SnapshotStore>,
    mut snapshots: watch::Receiver<Snapshot>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        tracing::debug!("snapshot persister started");
        while snapshots.changed().await.is_ok() {
            let snapshot = snapshots.borrow_and_update().clone();
            let backend = Arc::clone(&backend);
            // Backend IO is blocking (file system); keep it off the runtime.
            let result = tokio::task::spawn_blocking(move || backend.save(&snapshot)).await;
            match result {
                Ok(Ok(())) => tracing::debug!("snapshot persisted"),
                Ok(Err(err)) => tracing::warn!("failed to persist snapshot: {err}"),
                Err(err) => tracing::warn!("snapshot save task failed: {err}"),
            }
        }
        tracing::debug!("snapshot persister stopped");
    })
}
