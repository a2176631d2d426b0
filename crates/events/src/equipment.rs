//! Rented equipment attached to an event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stageprep_core::{DomainError, DomainResult, RentalId};

/// Booking lifecycle of a rental, driven by explicit status changes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RentalStatus {
    Pending,
    Confirmed,
    PickedUp,
    Returned,
}

/// Where the rental window sits relative to "now". Derived, never stored.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RentalPhase {
    Upcoming,
    Active,
    Completed,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub name: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentRental {
    pub id: RentalId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub quantity: u32,
    pub pickup_date: DateTime<Utc>,
    pub return_date: DateTime<Utc>,
    #[serde(default)]
    pub delivery: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<String>,
    #[serde(default)]
    pub supplier: Supplier,
    pub status: RentalStatus,
    #[serde(default)]
    pub cost: f64,
}

impl EquipmentRental {
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("rental name cannot be empty"));
        }
        if self.quantity == 0 {
            return Err(DomainError::validation(
                "rental quantity must be at least 1",
            ));
        }
        if self.return_date < self.pickup_date {
            return Err(DomainError::validation(
                "return date cannot precede pickup date",
            ));
        }
        if self.delivery
            && self
                .delivery_address
                .as_deref()
                .is_none_or(|addr| addr.trim().is_empty())
        {
            return Err(DomainError::validation(
                "delivery rentals require a delivery address",
            ));
        }
        if self.cost < 0.0 {
            return Err(DomainError::validation("rental cost cannot be negative"));
        }
        Ok(())
    }

    /// Classify the rental window against `now`.
    pub fn phase(&self, now: DateTime<Utc>) -> RentalPhase {
        if now < self.pickup_date {
            RentalPhase::Upcoming
        } else if now <= self.return_date {
            RentalPhase::Active
        } else {
            RentalPhase::Completed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn rental() -> EquipmentRental {
        EquipmentRental {
            id: RentalId::new(),
            name: "Line Array".to_string(),
            description: "Main PA hang".to_string(),
            quantity: 2,
            pickup_date: Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap(),
            return_date: Utc.with_ymd_and_hms(2024, 6, 3, 18, 0, 0).unwrap(),
            delivery: false,
            delivery_address: None,
            supplier: Supplier {
                name: "ProSound Rentals".to_string(),
                contact: "rentals@prosound.example".to_string(),
                phone: "555-0100".to_string(),
            },
            status: RentalStatus::Pending,
            cost: 800.0,
        }
    }

    #[test]
    fn valid_rental_passes() {
        assert!(rental().validate().is_ok());
    }

    #[test]
    fn return_before_pickup_is_rejected() {
        let mut r = rental();
        r.return_date = r.pickup_date - chrono::Duration::hours(1);
        assert!(r.validate().is_err());
    }

    #[test]
    fn delivery_requires_address() {
        let mut r = rental();
        r.delivery = true;
        assert!(r.validate().is_err());
        r.delivery_address = Some("12 Dock Road".to_string());
        assert!(r.validate().is_ok());
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let mut r = rental();
        r.quantity = 0;
        assert!(r.validate().is_err());
    }

    #[test]
    fn phase_tracks_the_rental_window() {
        let r = rental();
        let before = r.pickup_date - chrono::Duration::days(1);
        let during = r.pickup_date + chrono::Duration::days(1);
        let after = r.return_date + chrono::Duration::hours(1);
        assert_eq!(r.phase(before), RentalPhase::Upcoming);
        assert_eq!(r.phase(during), RentalPhase::Active);
        assert_eq!(r.phase(r.pickup_date), RentalPhase::Active);
        assert_eq!(r.phase(r.return_date), RentalPhase::Active);
        assert_eq!(r.phase(after), RentalPhase::Completed);
    }
}
