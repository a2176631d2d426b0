//! Shared event-type vocabulary.
//!
//! Templates are keyed to an event type and events carry one, so the enum
//! lives in the foundation crate both domain crates depend on.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Closed set of event kinds, shared by events and checklist templates.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Concert,
    Exhibition,
    Workshop,
    Festival,
    Party,
    Wedding,
    Other,
}

impl EventType {
    pub const ALL: [EventType; 7] = [
        EventType::Concert,
        EventType::Exhibition,
        EventType::Workshop,
        EventType::Festival,
        EventType::Party,
        EventType::Wedding,
        EventType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Concert => "concert",
            EventType::Exhibition => "exhibition",
            EventType::Workshop => "workshop",
            EventType::Festival => "festival",
            EventType::Party => "party",
            EventType::Wedding => "wedding",
            EventType::Other => "other",
        }
    }
}

impl core::fmt::Display for EventType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown event type: {s}")))
    }
}
