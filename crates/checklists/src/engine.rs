//! Pure checklist derivation and manipulation.
//!
//! Every function here returns a fresh sequence; callers own when (and
//! whether) to commit the result. Nothing in this module performs IO.

use serde::{Deserialize, Serialize};

use stageprep_core::{DomainError, DomainResult, ItemId};

use crate::template::ChecklistTemplate;

/// One line of a per-event checklist: which item, and whether it has been
/// prepared. Ownership is by value; the entry stays valid even if the item
/// record is later deleted.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistEntry {
    pub item_id: ItemId,
    pub completed: bool,
}

impl ChecklistEntry {
    pub fn pending(item_id: ItemId) -> Self {
        Self {
            item_id,
            completed: false,
        }
    }
}

/// Completion summary of a checklist.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistProgress {
    pub completed: usize,
    pub total: usize,
    pub ratio: f64,
}

/// Produce one pending entry per template item, in template order.
///
/// Deterministic: deriving twice from the same template yields identical
/// sequences.
pub fn derive_from_template(template: &ChecklistTemplate) -> Vec<ChecklistEntry> {
    template
        .items()
        .iter()
        .copied()
        .map(ChecklistEntry::pending)
        .collect()
}

/// Append pending entries for every id not already present.
///
/// Already-present ids are silently skipped (re-adding is idempotent, not an
/// error), and ids repeated within `item_ids` are added once.
pub fn add_items(checklist: &[ChecklistEntry], item_ids: &[ItemId]) -> Vec<ChecklistEntry> {
    let mut next = checklist.to_vec();
    for &id in item_ids {
        if !next.iter().any(|entry| entry.item_id == id) {
            next.push(ChecklistEntry::pending(id));
        }
    }
    next
}

/// Flip `completed` for the entry matching `item_id`.
///
/// An absent id is an error rather than a no-op so callers cannot silently
/// lose a toggle against a stale checklist.
pub fn toggle(checklist: &[ChecklistEntry], item_id: ItemId) -> DomainResult<Vec<ChecklistEntry>> {
    if !checklist.iter().any(|entry| entry.item_id == item_id) {
        return Err(DomainError::not_found());
    }
    Ok(checklist
        .iter()
        .map(|entry| {
            if entry.item_id == item_id {
                ChecklistEntry {
                    item_id: entry.item_id,
                    completed: !entry.completed,
                }
            } else {
                *entry
            }
        })
        .collect())
}

/// Completion counts plus a ratio safe for empty checklists.
pub fn progress(checklist: &[ChecklistEntry]) -> ChecklistProgress {
    let total = checklist.len();
    let completed = checklist.iter().filter(|entry| entry.completed).count();
    let ratio = if total == 0 {
        0.0
    } else {
        completed as f64 / total as f64
    };
    ChecklistProgress {
        completed,
        total,
        ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::TemplateDraft;
    use stageprep_core::{EventType, TemplateId};
    use stageprep_inventory::{Item, ItemDraft};

    fn inventory_item(name: &str, category: &str) -> Item {
        Item::create(
            ItemId::new(),
            ItemDraft {
                name: name.to_string(),
                category: category.to_string(),
                description: String::new(),
                quantity: 4,
                available: 4,
                notes: None,
                last_used: None,
            },
        )
        .unwrap()
    }

    fn template(items: &[Item]) -> ChecklistTemplate {
        ChecklistTemplate::create(
            TemplateId::new(),
            TemplateDraft {
                name: "Basic Concert Setup".to_string(),
                event_type: EventType::Concert,
                items: items.iter().map(|i| i.id_typed()).collect(),
            },
            items,
        )
        .unwrap()
    }

    #[test]
    fn derive_produces_pending_entries_in_template_order() {
        let items = [
            inventory_item("Speaker", "Audio"),
            inventory_item("Par Light", "Lighting"),
        ];
        let tpl = template(&items);
        let checklist = derive_from_template(&tpl);
        assert_eq!(checklist.len(), 2);
        assert_eq!(checklist[0].item_id, items[0].id_typed());
        assert_eq!(checklist[1].item_id, items[1].id_typed());
        assert!(checklist.iter().all(|entry| !entry.completed));
    }

    #[test]
    fn derive_is_deterministic() {
        let items = [
            inventory_item("Speaker", "Audio"),
            inventory_item("Par Light", "Lighting"),
        ];
        let tpl = template(&items);
        assert_eq!(derive_from_template(&tpl), derive_from_template(&tpl));
    }

    #[test]
    fn add_items_skips_already_present_ids() {
        let present = ItemId::new();
        let fresh = ItemId::new();
        let checklist = vec![ChecklistEntry {
            item_id: present,
            completed: true,
        }];
        let next = add_items(&checklist, &[present, fresh]);
        assert_eq!(next.len(), 2);
        // The existing entry keeps its completion state.
        assert!(next[0].completed);
        assert_eq!(next[1].item_id, fresh);
        assert!(!next[1].completed);
    }

    #[test]
    fn add_items_dedupes_within_one_call() {
        let id = ItemId::new();
        let next = add_items(&[], &[id, id, id]);
        assert_eq!(next.len(), 1);
    }

    #[test]
    fn toggle_flips_only_the_matching_entry() {
        let a = ItemId::new();
        let b = ItemId::new();
        let checklist = add_items(&[], &[a, b]);
        let next = toggle(&checklist, a).unwrap();
        assert!(next[0].completed);
        assert!(!next[1].completed);
        let back = toggle(&next, a).unwrap();
        assert_eq!(back, checklist);
    }

    #[test]
    fn toggle_unknown_id_is_not_found_and_leaves_input_unchanged() {
        let checklist = add_items(&[], &[ItemId::new()]);
        let before = checklist.clone();
        let err = toggle(&checklist, ItemId::new()).unwrap_err();
        assert_eq!(err, DomainError::NotFound);
        assert_eq!(checklist, before);
    }

    #[test]
    fn progress_of_empty_checklist_is_zero() {
        assert_eq!(
            progress(&[]),
            ChecklistProgress {
                completed: 0,
                total: 0,
                ratio: 0.0
            }
        );
    }

    #[test]
    fn progress_counts_completed_entries() {
        let a = ItemId::new();
        let b = ItemId::new();
        let checklist = toggle(&add_items(&[], &[a, b]), a).unwrap();
        let p = progress(&checklist);
        assert_eq!(p.completed, 1);
        assert_eq!(p.total, 2);
        assert!((p.ratio - 0.5).abs() < f64::EPSILON);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn pool() -> Vec<ItemId> {
            (0..8).map(|_| ItemId::new()).collect()
        }

        proptest! {
            /// Property: no sequence of add_items calls produces duplicate ids.
            /// Batches draw from one small shared pool so collisions occur both
            /// within a batch and across batches.
            #[test]
            fn add_items_never_duplicates(
                batches in proptest::collection::vec(
                    proptest::collection::vec(0usize..8, 0..6),
                    1..6,
                )
            ) {
                let pool = pool();
                let mut checklist = Vec::new();
                for batch in &batches {
                    let ids: Vec<ItemId> = batch.iter().map(|i| pool[*i]).collect();
                    checklist = add_items(&checklist, &ids);
                }
                let mut seen = std::collections::HashSet::new();
                for entry in &checklist {
                    prop_assert!(seen.insert(entry.item_id));
                }
            }

            /// Property: progress counts are consistent with the entries.
            #[test]
            fn progress_is_consistent(
                adds in proptest::collection::vec(0usize..8, 0..10),
                toggles in proptest::collection::vec(0usize..8, 0..10),
            ) {
                let pool = pool();
                let ids: Vec<ItemId> = adds.iter().map(|i| pool[*i]).collect();
                let mut checklist = add_items(&[], &ids);
                for idx in toggles {
                    if let Ok(next) = toggle(&checklist, pool[idx]) {
                        checklist = next;
                    }
                }
                let p = progress(&checklist);
                prop_assert_eq!(p.total, checklist.len());
                prop_assert!(p.completed <= p.total);
                if p.total == 0 {
                    prop_assert_eq!(p.ratio, 0.0);
                } else {
                    prop_assert!((p.ratio - p.completed as f64 / p.total as f64).abs() < f64::EPSILON);
                }
            }
        }
    }
}
