//! The authoritative state container.
//!
//! One `Store` exists per browsing session. Mutators run to completion under
//! the write lock (single writer, no interleaving), commit a fresh
//! `Arc<AppState>`, and publish the resulting snapshot for the detached
//! persistence worker. A failed persist never rolls back memory.

use std::sync::{Arc, PoisonError, RwLock};

use tokio::sync::watch;

use stageprep_checklists::{ChecklistTemplate, TemplateDraft, engine};
use stageprep_core::{
    DomainError, DomainResult, EventId, EventType, ItemId, SessionId, TemplateId,
};
use stageprep_events::{Event, EventDraft};
use stageprep_inventory::{Item, ItemDraft, ItemPatch};

use crate::persistence::{PersistenceError, SnapshotStore};
use crate::state::{AppState, Snapshot};

pub struct Store {
    session: SessionId,
    state: RwLock<Arc<AppState>>,
    backend: Arc<dyn SnapshotStore>,
    snapshots: watch::Sender<Snapshot>,
}

impl Store {
    /// Open the session's store, restoring the persisted snapshot if one
    /// exists.
    pub fn open(
        session: SessionId,
        backend: Arc<dyn SnapshotStore>,
    ) -> Result<Self, PersistenceError> {
        let state = match backend.load(&session)? {
            Some(snapshot) => {
                tracing::info!(%session, "restored persisted snapshot");
                snapshot.into_state()
            }
            None => {
                tracing::info!(%session, "no persisted snapshot, starting empty");
                AppState::default()
            }
        };
        let (snapshots, _) = watch::channel(Snapshot::of(session, &state));
        Ok(Self {
            session,
            state: RwLock::new(Arc::new(state)),
            backend,
            snapshots,
        })
    }

    /// Spawn the detached persistence worker for this store.
    ///
    /// Must be called from within a tokio runtime. The worker stops when the
    /// store is dropped.
    pub fn spawn_persister(&self) -> tokio::task::JoinHandle<()> {
        crate::persister::spawn_persister(Arc::clone(&self.backend), self.subscribe())
    }

    /// Watch the committed snapshots (the persistence worker's feed).
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshots.subscribe()
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    // --- reads ---

    /// The current immutable state. The returned `Arc` never changes after it
    /// is handed out; re-read to observe later mutations.
    pub fn state(&self) -> Arc<AppState> {
        Arc::clone(
            &self
                .state
                .read()
                .unwrap_or_else(PoisonError::into_inner),
        )
    }

    pub fn items(&self) -> Vec<Item> {
        self.state().items.clone()
    }

    pub fn events(&self) -> Vec<Event> {
        self.state().events.clone()
    }

    pub fn templates(&self) -> Vec<ChecklistTemplate> {
        self.state().templates.clone()
    }

    pub fn item(&self, id: ItemId) -> Option<Item> {
        self.state()
            .items
            .iter()
            .find(|item| item.id_typed() == id)
            .cloned()
    }

    pub fn event(&self, id: EventId) -> Option<Event> {
        self.state()
            .events
            .iter()
            .find(|event| event.id_typed() == id)
            .cloned()
    }

    pub fn template(&self, id: TemplateId) -> Option<ChecklistTemplate> {
        self.state()
            .templates
            .iter()
            .find(|template| template.id_typed() == id)
            .cloned()
    }

    /// Templates applicable to the given event type.
    pub fn templates_for_type(&self, event_type: EventType) -> Vec<ChecklistTemplate> {
        self.state()
            .templates
            .iter()
            .filter(|template| template.event_type() == event_type)
            .cloned()
            .collect()
    }

    // --- items ---

    /// Validate and add an item; the store assigns the id.
    pub fn add_item(&self, draft: ItemDraft) -> DomainResult<Item> {
        self.mutate(|state| {
            let item = Item::create(ItemId::new(), draft)?;
            tracing::debug!(item = %item.id_typed(), "added inventory item");
            state.items.push(item.clone());
            Ok(item)
        })
    }

    /// Merge a partial patch into an item. Unknown ids are a no-op
    /// (`Ok(None)`); an invalid patch is rejected with no partial write.
    pub fn update_item(&self, id: ItemId, patch: ItemPatch) -> DomainResult<Option<Item>> {
        self.mutate(|state| {
            let Some(slot) = state.items.iter_mut().find(|item| item.id_typed() == id) else {
                return Ok(None);
            };
            let updated = patch.apply_to(slot)?;
            *slot = updated.clone();
            Ok(Some(updated))
        })
    }

    /// Remove an item. Checklist entries referencing it are left in place;
    /// rendering layers filter ids with no matching record.
    pub fn delete_item(&self, id: ItemId) -> bool {
        self.mutate(|state| {
            let before = state.items.len();
            state.items.retain(|item| item.id_typed() != id);
            Ok::<_, DomainError>(state.items.len() != before)
        })
        .unwrap_or(false)
    }

    // --- events ---

    /// Validate and add an event with a fresh id. Collections absent from the
    /// draft default to empty.
    pub fn add_event(&self, draft: EventDraft) -> DomainResult<Event> {
        self.mutate(|state| {
            let event = Event::create(EventId::new(), draft)?;
            tracing::debug!(event = %event.id_typed(), "added event");
            state.events.push(event.clone());
            Ok(event)
        })
    }

    /// Add an event whose checklist is seeded from a template.
    ///
    /// The checklist is copied by value; deleting the template afterwards
    /// does not touch the event.
    pub fn create_event_from_template(
        &self,
        mut draft: EventDraft,
        template_id: TemplateId,
    ) -> DomainResult<Event> {
        self.mutate(|state| {
            let template = state
                .templates
                .iter()
                .find(|template| template.id_typed() == template_id)
                .ok_or_else(DomainError::not_found)?;
            draft.checklist = engine::derive_from_template(template);
            let event = Event::create(EventId::new(), draft)?;
            tracing::debug!(
                event = %event.id_typed(),
                template = %template_id,
                "added event from template"
            );
            state.events.push(event.clone());
            Ok(event)
        })
    }

    /// Validated replace-by-id. Unknown ids are a no-op (`Ok(false)`).
    pub fn update_event(&self, event: Event) -> DomainResult<bool> {
        self.mutate(|state| {
            event.validate()?;
            let Some(slot) = state
                .events
                .iter_mut()
                .find(|existing| existing.id_typed() == event.id_typed())
            else {
                return Ok(false);
            };
            *slot = event;
            Ok(true)
        })
    }

    pub fn delete_event(&self, id: EventId) -> bool {
        self.mutate(|state| {
            let before = state.events.len();
            state.events.retain(|event| event.id_typed() != id);
            Ok::<_, DomainError>(state.events.len() != before)
        })
        .unwrap_or(false)
    }

    /// Flip one checklist entry on an event. Missing event or entry is
    /// `NotFound`.
    pub fn toggle_checklist_item(&self, event_id: EventId, item_id: ItemId) -> DomainResult<Event> {
        self.mutate(|state| {
            let event = state
                .events
                .iter_mut()
                .find(|event| event.id_typed() == event_id)
                .ok_or_else(DomainError::not_found)?;
            event.toggle_checklist_item(item_id)?;
            Ok(event.clone())
        })
    }

    /// Append checklist entries for ids not already present on the event.
    pub fn add_checklist_items(
        &self,
        event_id: EventId,
        item_ids: &[ItemId],
    ) -> DomainResult<Event> {
        self.mutate(|state| {
            let event = state
                .events
                .iter_mut()
                .find(|event| event.id_typed() == event_id)
                .ok_or_else(DomainError::not_found)?;
            event.add_checklist_items(item_ids);
            Ok(event.clone())
        })
    }

    // --- templates ---

    /// Validate and add a template, deriving its categories from the current
    /// inventory.
    pub fn add_template(&self, draft: TemplateDraft) -> DomainResult<ChecklistTemplate> {
        self.mutate(|state| {
            let template = ChecklistTemplate::create(TemplateId::new(), draft, &state.items)?;
            tracing::debug!(template = %template.id_typed(), "added checklist template");
            state.templates.push(template.clone());
            Ok(template)
        })
    }

    /// Remove a template. Events previously seeded from it keep their
    /// checklists untouched.
    pub fn delete_template(&self, id: TemplateId) -> bool {
        self.mutate(|state| {
            let before = state.templates.len();
            state.templates.retain(|template| template.id_typed() != id);
            Ok::<_, DomainError>(state.templates.len() != before)
        })
        .unwrap_or(false)
    }

    // --- persistence ---

    /// Current durable form of the store.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::of(self.session, &self.state())
    }

    /// Fire-and-forget: re-publish the current snapshot to the worker.
    /// Never blocks on storage latency.
    pub fn persist(&self) {
        self.snapshots.send_replace(self.snapshot());
    }

    /// Synchronous save, for shutdown paths that must not race the worker.
    pub fn persist_now(&self) -> Result<(), PersistenceError> {
        self.backend.save(&self.snapshot())
    }

    /// Run a mutation against a copy of the state and commit it only on
    /// success. The commit is visible to the very next read; the snapshot is
    /// published after the lock is released.
    fn mutate<T, E>(&self, op: impl FnOnce(&mut AppState) -> Result<T, E>) -> Result<T, E> {
        let snapshot;
        let out;
        {
            let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
            let mut next = (**guard).clone();
            out = op(&mut next)?;
            *guard = Arc::new(next);
            snapshot = Snapshot::of(self.session, &guard);
        }
        self.snapshots.send_replace(snapshot);
        Ok(out)
    }
}
