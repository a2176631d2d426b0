//! Bucketing events relative to "now".
//!
//! Pure and uncached: callers re-evaluate whenever their clock advances.

use chrono::{DateTime, Duration, Utc};

use crate::event::Event;

/// Length of the "coming up" window, in days.
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

/// Events partitioned by where their date falls relative to `now`.
///
/// Buckets borrow from the input slice and preserve its order.
#[derive(Debug, Default, PartialEq)]
pub struct CategorizedEvents<'a> {
    /// Strictly before `now`.
    pub past: Vec<&'a Event>,
    /// Within `[now, now + 7 days]`, both bounds inclusive.
    pub upcoming: Vec<&'a Event>,
    /// Beyond the window.
    pub future: Vec<&'a Event>,
}

/// Partition every event into exactly one bucket.
pub fn categorize(events: &[Event], now: DateTime<Utc>) -> CategorizedEvents<'_> {
    let horizon = now + Duration::days(UPCOMING_WINDOW_DAYS);
    let mut buckets = CategorizedEvents::default();
    for event in events {
        if event.date() < now {
            buckets.past.push(event);
        } else if event.date() <= horizon {
            buckets.upcoming.push(event);
        } else {
            buckets.future.push(event);
        }
    }
    buckets
}
