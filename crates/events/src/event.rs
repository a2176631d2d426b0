use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stageprep_checklists::{ChecklistEntry, ChecklistProgress, engine};
use stageprep_core::{
    DomainError, DomainResult, Entity, EventId, EventType, ItemId, MerchandiseId, RentalId,
};

use crate::artist::{Artist, Performance};
use crate::budget::Budget;
use crate::details::EventDetails;
use crate::equipment::EquipmentRental;
use crate::merchandise::MerchandiseItem;

/// A scheduled occurrence with its own checklist and ancillary planning data.
///
/// Checklist entries reference inventory items by id but own their state by
/// value: deleting an item record leaves the entry in place (rendering layers
/// filter unknown ids).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    id: EventId,
    name: String,
    date: DateTime<Utc>,
    #[serde(rename = "type")]
    event_type: EventType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    venue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    expected_attendees: Option<u32>,
    checklist: Vec<ChecklistEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
    #[serde(default)]
    details: EventDetails,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    artists: Vec<Artist>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    performances: Vec<Performance>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    merchandise: Vec<MerchandiseItem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    equipment: Vec<EquipmentRental>,
    #[serde(default)]
    budget: Budget,
}

/// Input shape for creating an event; collections default to empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub name: String,
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub event_type: EventType,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub expected_attendees: Option<u32>,
    #[serde(default)]
    pub checklist: Vec<ChecklistEntry>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub details: EventDetails,
    #[serde(default)]
    pub artists: Vec<Artist>,
    #[serde(default)]
    pub performances: Vec<Performance>,
    #[serde(default)]
    pub merchandise: Vec<MerchandiseItem>,
    #[serde(default)]
    pub equipment: Vec<EquipmentRental>,
    #[serde(default)]
    pub budget: Budget,
}

impl EventDraft {
    pub fn new(name: impl Into<String>, date: DateTime<Utc>, event_type: EventType) -> Self {
        Self {
            name: name.into(),
            date,
            event_type,
            venue: None,
            expected_attendees: None,
            checklist: Vec::new(),
            notes: None,
            details: EventDetails::default(),
            artists: Vec::new(),
            performances: Vec::new(),
            merchandise: Vec::new(),
            equipment: Vec::new(),
            budget: Budget::default(),
        }
    }
}

impl Event {
    /// Validate a draft and materialize it under the given id.
    pub fn create(id: EventId, draft: EventDraft) -> DomainResult<Self> {
        let event = Self {
            id,
            name: draft.name,
            date: draft.date,
            event_type: draft.event_type,
            venue: draft.venue,
            expected_attendees: draft.expected_attendees,
            checklist: draft.checklist,
            notes: draft.notes,
            details: draft.details,
            artists: draft.artists,
            performances: draft.performances,
            merchandise: draft.merchandise,
            equipment: draft.equipment,
            budget: draft.budget,
        };
        event.validate()?;
        Ok(event)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("event name cannot be empty"));
        }
        let mut seen = std::collections::HashSet::new();
        for entry in &self.checklist {
            if !seen.insert(entry.item_id) {
                return Err(DomainError::validation(format!(
                    "checklist references item {} more than once",
                    entry.item_id
                )));
            }
        }
        self.details.validate()?;
        self.budget.validate()?;
        for artist in &self.artists {
            artist.validate()?;
        }
        for performance in &self.performances {
            performance.validate()?;
        }
        for line in &self.merchandise {
            line.validate()?;
        }
        for rental in &self.equipment {
            rental.validate()?;
        }
        Ok(())
    }

    pub fn id_typed(&self) -> EventId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    pub fn venue(&self) -> Option<&str> {
        self.venue.as_deref()
    }

    pub fn expected_attendees(&self) -> Option<u32> {
        self.expected_attendees
    }

    pub fn checklist(&self) -> &[ChecklistEntry] {
        &self.checklist
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn details(&self) -> &EventDetails {
        &self.details
    }

    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    pub fn performances(&self) -> &[Performance] {
        &self.performances
    }

    pub fn merchandise(&self) -> &[MerchandiseItem] {
        &self.merchandise
    }

    pub fn equipment(&self) -> &[EquipmentRental] {
        &self.equipment
    }

    pub fn budget(&self) -> &Budget {
        &self.budget
    }

    // --- checklist ---

    /// Flip completion for one checklist entry.
    pub fn toggle_checklist_item(&mut self, item_id: ItemId) -> DomainResult<()> {
        self.checklist = engine::toggle(&self.checklist, item_id)?;
        Ok(())
    }

    /// Append pending entries for ids not already on the checklist.
    pub fn add_checklist_items(&mut self, item_ids: &[ItemId]) {
        self.checklist = engine::add_items(&self.checklist, item_ids);
    }

    pub fn checklist_progress(&self) -> ChecklistProgress {
        engine::progress(&self.checklist)
    }

    // --- field-level edits ---

    pub fn set_notes(&mut self, notes: Option<String>) {
        self.notes = notes.filter(|n| !n.is_empty());
    }

    pub fn set_details(&mut self, details: EventDetails) -> DomainResult<()> {
        details.validate()?;
        self.details = details;
        Ok(())
    }

    pub fn set_budget(&mut self, budget: Budget) -> DomainResult<()> {
        budget.validate()?;
        self.budget = budget;
        Ok(())
    }

    /// Insert or replace a merchandise line by id.
    pub fn upsert_merchandise(&mut self, line: MerchandiseItem) -> DomainResult<()> {
        line.validate()?;
        match self.merchandise.iter_mut().find(|m| m.id == line.id) {
            Some(existing) => *existing = line,
            None => self.merchandise.push(line),
        }
        Ok(())
    }

    pub fn remove_merchandise(&mut self, id: MerchandiseId) -> bool {
        let before = self.merchandise.len();
        self.merchandise.retain(|m| m.id != id);
        self.merchandise.len() != before
    }

    /// Insert or replace an equipment rental by id.
    pub fn upsert_equipment(&mut self, rental: EquipmentRental) -> DomainResult<()> {
        rental.validate()?;
        match self.equipment.iter_mut().find(|r| r.id == rental.id) {
            Some(existing) => *existing = rental,
            None => self.equipment.push(rental),
        }
        Ok(())
    }

    pub fn remove_equipment(&mut self, id: RentalId) -> bool {
        let before = self.equipment.len();
        self.equipment.retain(|r| r.id != id);
        self.equipment.len() != before
    }
}

impl Entity for Event {
    type Id = EventId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
