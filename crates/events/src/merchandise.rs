//! Merchandise lines attached to an event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stageprep_core::{DomainError, DomainResult, MerchandiseId};

/// Ordering lifecycle of a merchandise line.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MerchandiseStatus {
    Draft,
    Ordered,
    Received,
}

/// Supplier order information, filled in once the line leaves `Draft`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetails {
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_delivery: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchandiseItem {
    pub id: MerchandiseId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<String>,
    pub status: MerchandiseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_details: Option<OrderDetails>,
}

impl MerchandiseItem {
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("merchandise name cannot be empty"));
        }
        if self.price < 0.0 {
            return Err(DomainError::validation(
                "merchandise price cannot be negative",
            ));
        }
        if let Some(order) = &self.order_details {
            if order.quantity == 0 {
                return Err(DomainError::validation(
                    "merchandise order quantity must be at least 1",
                ));
            }
        }
        Ok(())
    }
}
