//! Session-scoped state container for items, events and checklist templates.
//!
//! The [`Store`] owns the single authoritative copy of all three collections.
//! Mutators validate, commit a fresh immutable snapshot, and publish it to a
//! detached persistence worker; reads always see the latest committed state.

pub mod persistence;
pub mod persister;
pub mod state;
pub mod store;

pub use persistence::{InMemorySnapshotStore, JsonFileStore, PersistenceError, SnapshotStore};
pub use persister::spawn_persister;
pub use state::{AppState, Snapshot};
pub use store::Store;
