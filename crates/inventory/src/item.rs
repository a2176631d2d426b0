use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stageprep_core::{DomainError, DomainResult, Entity, ItemId};

/// A reusable physical asset tracked by total/available quantity.
///
/// `available` counts units not currently allocated; the invariant
/// `available <= quantity` holds for every constructed or patched item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    id: ItemId,
    name: String,
    /// Free-text label (not a closed enum); templates derive their category
    /// sets from it.
    category: String,
    description: String,
    quantity: u32,
    available: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_used: Option<DateTime<Utc>>,
}

/// Input shape for creating an item; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDraft {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub quantity: u32,
    pub available: u32,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub last_used: Option<DateTime<Utc>>,
}

/// Partial-field update; only provided fields are merged.
///
/// Out-of-range results (e.g. `available > quantity` after the merge) are
/// rejected, never clamped, so a failed patch leaves the item untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub available: Option<u32>,
    #[serde(default)]
    pub notes: Option<Option<String>>,
    #[serde(default)]
    pub last_used: Option<Option<DateTime<Utc>>>,
}

impl Item {
    /// Validate a draft and materialize it under the given id.
    pub fn create(id: ItemId, draft: ItemDraft) -> DomainResult<Self> {
        let item = Self {
            id,
            name: draft.name,
            category: draft.category,
            description: draft.description,
            quantity: draft.quantity,
            available: draft.available,
            notes: draft.notes,
            last_used: draft.last_used,
        };
        item.validate()?;
        Ok(item)
    }

    fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("item name cannot be empty"));
        }
        if self.category.trim().is_empty() {
            return Err(DomainError::validation("item category cannot be empty"));
        }
        if self.available > self.quantity {
            return Err(DomainError::validation(format!(
                "available ({}) cannot exceed quantity ({})",
                self.available, self.quantity
            )));
        }
        Ok(())
    }

    pub fn id_typed(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn available(&self) -> u32 {
        self.available
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn last_used(&self) -> Option<DateTime<Utc>> {
        self.last_used
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl ItemPatch {
    /// Merge the provided fields into `item` and validate the result.
    ///
    /// Returns a fresh item; the input is never mutated, so a validation
    /// failure cannot leave a partial write behind.
    pub fn apply_to(&self, item: &Item) -> DomainResult<Item> {
        let mut next = item.clone();
        if let Some(name) = &self.name {
            next.name = name.clone();
        }
        if let Some(category) = &self.category {
            next.category = category.clone();
        }
        if let Some(description) = &self.description {
            next.description = description.clone();
        }
        if let Some(quantity) = self.quantity {
            next.quantity = quantity;
        }
        if let Some(available) = self.available {
            next.available = available;
        }
        if let Some(notes) = &self.notes {
            next.notes = notes.clone();
        }
        if let Some(last_used) = self.last_used {
            next.last_used = last_used;
        }
        next.validate()?;
        Ok(next)
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
