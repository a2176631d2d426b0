//! Checklist domain module.
//!
//! Reusable templates (named, event-type-scoped item sets) and the pure
//! engine that derives and manipulates per-event checklists.

pub mod engine;
pub mod template;

pub use engine::{ChecklistEntry, ChecklistProgress, add_items, derive_from_template, progress, toggle};
pub use template::{ChecklistTemplate, TemplateDraft};
