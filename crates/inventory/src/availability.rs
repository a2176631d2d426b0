//! Per-item availability classification.
//!
//! The status badge and the low-stock filter must agree, so both go through
//! the single `LOW_STOCK_RATIO` constant.

use serde::{Deserialize, Serialize};

use crate::item::Item;

/// Fraction of total quantity below which an item counts as low stock.
///
/// The comparison is strict: `available < quantity * LOW_STOCK_RATIO`.
pub const LOW_STOCK_RATIO: f64 = 0.2;

/// Availability state of an item, derived from its counts.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityStatus {
    /// Every owned unit is available (`available == quantity`, nonzero).
    Full,
    /// Some units are out but stock is above the low threshold.
    Partial,
    /// Below the low-stock threshold but not empty.
    Low,
    /// Nothing left to allocate (`available == 0`).
    Exhausted,
}

impl AvailabilityStatus {
    /// Classify an item by its quantity/available counts.
    pub fn of(item: &Item) -> Self {
        if item.available() == 0 {
            return Self::Exhausted;
        }
        if item.available() == item.quantity() {
            return Self::Full;
        }
        if below_low_stock_threshold(item) {
            return Self::Low;
        }
        Self::Partial
    }
}

/// Filter predicate for the "low stock" view.
///
/// Strict threshold; an exhausted item also satisfies it, matching the
/// badge's red/yellow split rather than replacing it.
pub fn below_low_stock_threshold(item: &Item) -> bool {
    (item.available() as f64) < (item.quantity() as f64) * LOW_STOCK_RATIO
}
