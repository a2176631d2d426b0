//! Open-ended planning details attached to an event.
//!
//! Known fields are typed; anything else lands in the `extra` map so callers
//! can attach ad-hoc keys without widening the struct.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use stageprep_core::{DomainError, DomainResult};

/// Venue/logistics record for an event. All fields optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue_contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_in_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound_check: Option<String>,
    /// Keyed run-of-show entries ("18:00" -> "doors open").
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub timeline: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticketing: Option<Ticketing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<Promotion>,
    /// Escape hatch for free-form extension keys.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticketing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sold_count: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub channels: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub materials: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub target_audience: Vec<String>,
}

impl EventDetails {
    pub fn validate(&self) -> DomainResult<()> {
        if let Some(ticketing) = &self.ticketing {
            if let Some(price) = ticketing.price {
                if price < 0.0 {
                    return Err(DomainError::validation("ticket price cannot be negative"));
                }
            }
        }
        if let Some(promotion) = &self.promotion {
            if let Some(budget) = promotion.budget {
                if budget < 0.0 {
                    return Err(DomainError::validation(
                        "promotion budget cannot be negative",
                    ));
                }
            }
        }
        Ok(())
    }
}
