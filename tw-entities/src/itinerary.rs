use time::Duration;

use crate::{id::Id, time::Timestamp};

/// A generated day-by-day place schedule for a trip.
///
/// Itineraries are derived data: they are rebuilt from the trip's
/// accepted places and cached with a TTL, never edited directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripItinerary {
    pub trip: Id,
    pub generated_at: Timestamp,
    pub days: Vec<ItineraryDay>,
}

impl TripItinerary {
    pub fn is_fresh(&self, now: Timestamp, ttl: Duration) -> bool {
        now < self.generated_at.saturating_add(ttl)
    }

    pub fn item_count(&self) -> usize {
        self.days.iter().map(|d| d.items.len()).sum()
    }
}

/// One 1-based trip day of the schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItineraryDay {
    pub day: u32,
    pub items: Vec<ItineraryItem>,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItineraryItem {
    pub place       : Id,
    pub order_index : u32,
    pub is_fixed    : bool,
}
