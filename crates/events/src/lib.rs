//! Scheduled-event domain module.
//!
//! An event owns its checklist, planning details, merchandise, equipment
//! rentals and budget. Everything here is deterministic domain logic; the
//! store decides when state is committed and persisted.

pub mod artist;
pub mod budget;
pub mod details;
pub mod equipment;
pub mod event;
pub mod merchandise;
pub mod schedule;

pub use artist::{Artist, ContactInfo, Performance, PerformanceRequirements, SocialLinks, Soundcheck};
pub use budget::{Budget, BudgetExpenses, BudgetIncome};
pub use details::{EventDetails, Promotion, Ticketing};
pub use equipment::{EquipmentRental, RentalPhase, RentalStatus, Supplier};
pub use event::{Event, EventDraft};
pub use merchandise::{MerchandiseItem, MerchandiseStatus, OrderDetails};
pub use schedule::{CategorizedEvents, UPCOMING_WINDOW_DAYS, categorize};
