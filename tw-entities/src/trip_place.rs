use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::*;
use strum::EnumString;
use thiserror::Error;

use crate::{email::EmailAddress, id::Id, time::Timestamp};

pub type TripPlaceStatusPrimitive = i16;

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TripPlaceStatus {
    Proposed = 0,
    Accepted = 1,
    Rejected = 2,
}

impl TripPlaceStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Proposed => "proposed",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }
}

#[derive(Debug, Error)]
#[error("Invalid trip place status primitive: {0}")]
pub struct InvalidTripPlaceStatusPrimitive(TripPlaceStatusPrimitive);

impl TryFrom<TripPlaceStatusPrimitive> for TripPlaceStatus {
    type Error = InvalidTripPlaceStatusPrimitive;
    fn try_from(from: TripPlaceStatusPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidTripPlaceStatusPrimitive(from))
    }
}

impl From<TripPlaceStatus> for TripPlaceStatusPrimitive {
    fn from(from: TripPlaceStatus) -> Self {
        from.to_i16().expect("Trip place status primitive")
    }
}

/// The pivot between a trip and a catalog place.
///
/// One row per (trip, place) pair. `day` and `order_index` position
/// the place within the generated itinerary, `is_fixed` pins it to
/// exactly that slot.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripPlace {
    pub trip        : Id,
    pub place       : Id,
    pub status      : TripPlaceStatus,
    pub is_fixed    : bool,
    pub day         : Option<u32>,
    pub order_index : Option<u32>,
    pub note        : Option<String>,
    pub proposed_by : EmailAddress,
    pub created_at  : Timestamp,
}

impl TripPlace {
    pub fn is_accepted(&self) -> bool {
        self.status == TripPlaceStatus::Accepted
    }
}
