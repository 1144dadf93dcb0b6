use crate::{activity::*, address::*, geo::*, id::*, time::*};

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub pos: MapPoint,
    pub address: Option<Address>,
}

/// Star rating imported from an external source, e.g. a review
/// aggregator, in the range [0.0, 5.0].
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct ExternalRating(f64);

impl ExternalRating {
    pub fn new(val: f64) -> Self {
        let new = Self(val);
        debug_assert!(new.is_valid());
        new
    }

    pub const fn min() -> Self {
        Self(0.0)
    }

    pub const fn max() -> Self {
        Self(5.0)
    }

    pub fn clamp(self) -> Self {
        Self(self.0.max(Self::min().0).min(Self::max().0))
    }

    pub fn is_valid(self) -> bool {
        self.0.is_finite() && self >= Self::min() && self <= Self::max()
    }
}

impl From<f64> for ExternalRating {
    fn from(from: f64) -> Self {
        Self(from)
    }
}

impl From<ExternalRating> for f64 {
    fn from(from: ExternalRating) -> Self {
        from.0
    }
}

/// An entry of the shared place catalog.
///
/// Places exist independently of trips. Trips reference them
/// through [`crate::trip_place::TripPlace`] pivots.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub id: Id,
    pub created: Activity,
    pub title: String,
    pub description: String,
    pub location: Location,
    pub category: Id,
    pub rating: Option<ExternalRating>,
    pub rating_count: u64,
    pub image_url: Option<String>,
    pub archived_at: Option<Timestamp>,
}

impl Place {
    pub fn is_archived(&self) -> bool {
        self.archived_at.is_some()
    }

    pub fn pos(&self) -> MapPoint {
        self.location.pos
    }
}
