//! The store's state shape and its persisted form.

use serde::{Deserialize, Serialize};

use stageprep_checklists::ChecklistTemplate;
use stageprep_core::SessionId;
use stageprep_events::Event;
use stageprep_inventory::Item;

/// The three owned collections. Handed to readers behind an `Arc`; a reader's
/// copy never changes after it is handed out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub items: Vec<Item>,
    pub events: Vec<Event>,
    pub templates: Vec<ChecklistTemplate>,
}

/// Durable form of the store: the three collections plus the session scope.
///
/// Nothing else (loading flags, auth state) belongs here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub session: SessionId,
    pub items: Vec<Item>,
    pub events: Vec<Event>,
    pub templates: Vec<ChecklistTemplate>,
}

impl Snapshot {
    pub fn empty(session: SessionId) -> Self {
        Self {
            session,
            items: Vec::new(),
            events: Vec::new(),
            templates: Vec::new(),
        }
    }

    pub fn of(session: SessionId, state: &AppState) -> Self {
        Self {
            session,
            items: state.items.clone(),
            events: state.events.clone(),
            templates: state.templates.clone(),
        }
    }

    pub fn into_state(self) -> AppState {
        AppState {
            items: self.items,
            events: self.events,
            templates: self.templates,
        }
    }
}
