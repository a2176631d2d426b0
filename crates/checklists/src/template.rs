//! Reusable checklist templates.
//!
//! A template is a named, event-type-scoped ordered set of item references.
//! Its `categories` field is always derived from the referenced items'
//! categories: recomputed on every membership change, never hand-edited.

use serde::{Deserialize, Serialize};

use stageprep_core::{DomainError, DomainResult, Entity, EventType, ItemId, TemplateId};
use stageprep_inventory::Item;

/// A reusable set of item references used to seed a new event's checklist.
///
/// Templates have no reference-counting tie to events seeded from them: an
/// event copies the item list by value and the template can be deleted
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistTemplate {
    id: TemplateId,
    name: String,
    #[serde(rename = "type")]
    event_type: EventType,
    /// Distinct categories covered by `items`, in first-seen item order.
    categories: Vec<String>,
    /// Ordered item references; duplicates are rejected on construction.
    items: Vec<ItemId>,
}

/// Input shape for authoring a template; categories are derived, not supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateDraft {
    pub name: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    #[serde(default)]
    pub items: Vec<ItemId>,
}

impl ChecklistTemplate {
    /// Validate a draft and derive its category set against `inventory`.
    pub fn create(id: TemplateId, draft: TemplateDraft, inventory: &[Item]) -> DomainResult<Self> {
        if draft.name.trim().is_empty() {
            return Err(DomainError::validation("template name cannot be empty"));
        }
        let mut seen = std::collections::HashSet::new();
        for item_id in &draft.items {
            if !seen.insert(*item_id) {
                return Err(DomainError::validation(format!(
                    "template references item {item_id} more than once"
                )));
            }
        }
        let categories = distinct_categories(&draft.items, inventory);
        Ok(Self {
            id,
            name: draft.name,
            event_type: draft.event_type,
            categories,
            items: draft.items,
        })
    }

    /// Add or remove a single item reference and recompute `categories`.
    ///
    /// This is the authoring flow: checking an item's box adds it, unchecking
    /// removes it.
    pub fn toggle_item(&mut self, item_id: ItemId, inventory: &[Item]) {
        if let Some(pos) = self.items.iter().position(|id| *id == item_id) {
            self.items.remove(pos);
        } else {
            self.items.push(item_id);
        }
        self.categories = distinct_categories(&self.items, inventory);
    }

    pub fn id_typed(&self) -> TemplateId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn items(&self) -> &[ItemId] {
        &self.items
    }
}

impl Entity for ChecklistTemplate {
    type Id = TemplateId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Distinct categories of the referenced items, in first-seen order.
///
/// References without a matching item record contribute nothing (the item may
/// have been deleted since the template was authored).
pub fn distinct_categories(item_ids: &[ItemId], inventory: &[Item]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for item_id in item_ids {
        let Some(item) = inventory.iter().find(|item| item.id_typed() == *item_id) else {
            continue;
        };
        if !categories.iter().any(|c| c == item.category()) {
            categories.push(item.category().to_string());
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use stageprep_inventory::ItemDraft;

    fn inventory_item(name: &str, category: &str) -> Item {
        Item::create(
            ItemId::new(),
            ItemDraft {
                name: name.to_string(),
                category: category.to_string(),
                description: String::new(),
                quantity: 2,
                available: 2,
                notes: None,
                last_used: None,
            },
        )
        .unwrap()
    }

    #[test]
    fn create_derives_categories_from_items() {
        let items = [
            inventory_item("Speaker", "Audio"),
            inventory_item("Mixer", "Audio"),
            inventory_item("Par Light", "Lighting"),
        ];
        let tpl = ChecklistTemplate::create(
            TemplateId::new(),
            TemplateDraft {
                name: "Basic Concert Setup".to_string(),
                event_type: EventType::Concert,
                items: items.iter().map(|i| i.id_typed()).collect(),
            },
            &items,
        )
        .unwrap();
        assert_eq!(tpl.categories(), ["Audio", "Lighting"]);
    }

    #[test]
    fn create_rejects_empty_name() {
        let err = ChecklistTemplate::create(
            TemplateId::new(),
            TemplateDraft {
                name: " ".to_string(),
                event_type: EventType::Party,
                items: vec![],
            },
            &[],
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn create_rejects_duplicate_item_references() {
        let item = inventory_item("Speaker", "Audio");
        let err = ChecklistTemplate::create(
            TemplateId::new(),
            TemplateDraft {
                name: "Duped".to_string(),
                event_type: EventType::Party,
                items: vec![item.id_typed(), item.id_typed()],
            },
            &[item],
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn create_allows_empty_item_list() {
        let tpl = ChecklistTemplate::create(
            TemplateId::new(),
            TemplateDraft {
                name: "Blank Slate".to_string(),
                event_type: EventType::Other,
                items: vec![],
            },
            &[],
        )
        .unwrap();
        assert!(tpl.items().is_empty());
        assert!(tpl.categories().is_empty());
    }

    #[test]
    fn toggle_item_adds_then_removes_and_recomputes_categories() {
        let items = [
            inventory_item("Speaker", "Audio"),
            inventory_item("Par Light", "Lighting"),
        ];
        let mut tpl = ChecklistTemplate::create(
            TemplateId::new(),
            TemplateDraft {
                name: "Evolving".to_string(),
                event_type: EventType::Festival,
                items: vec![items[0].id_typed()],
            },
            &items,
        )
        .unwrap();
        assert_eq!(tpl.categories(), ["Audio"]);

        tpl.toggle_item(items[1].id_typed(), &items);
        assert_eq!(tpl.categories(), ["Audio", "Lighting"]);

        tpl.toggle_item(items[0].id_typed(), &items);
        assert_eq!(tpl.items(), [items[1].id_typed()]);
        assert_eq!(tpl.categories(), ["Lighting"]);
    }

    #[test]
    fn missing_item_records_contribute_no_category() {
        let item = inventory_item("Speaker", "Audio");
        let tpl = ChecklistTemplate::create(
            TemplateId::new(),
            TemplateDraft {
                name: "Stale".to_string(),
                event_type: EventType::Concert,
                items: vec![item.id_typed(), ItemId::new()],
            },
            &[item],
        )
        .unwrap();
        assert_eq!(tpl.categories(), ["Audio"]);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: across arbitrary toggle sequences, `categories` stays
            /// equal to the distinct categories of the current item set.
            #[test]
            fn categories_track_membership(toggles in proptest::collection::vec(0usize..6, 0..40)) {
                let inventory: Vec<Item> = (0..6)
                    .map(|i| inventory_item(&format!("Item {i}"), ["Audio", "Lighting", "Power"][i % 3]))
                    .collect();
                let mut tpl = ChecklistTemplate::create(
                    TemplateId::new(),
                    TemplateDraft {
                        name: "Churn".to_string(),
                        event_type: EventType::Concert,
                        items: vec![],
                    },
                    &inventory,
                )
                .unwrap();

                for idx in toggles {
                    tpl.toggle_item(inventory[idx].id_typed(), &inventory);
                    let expected = distinct_categories(tpl.items(), &inventory);
                    prop_assert_eq!(tpl.categories().to_vec(), expected);
                }
            }
        }
    }
}
