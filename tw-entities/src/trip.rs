use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive, ToPrimitive};
use strum::EnumString;
use thiserror::Error;
use time::{Date, Duration};

use crate::{email::EmailAddress, geo::MapPoint, id::Id, time::Timestamp};

/// A planned journey owned by one user.
///
/// `start_pos` anchors the geo search for recommended places.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub id: Id,
    pub owner: EmailAddress,
    pub title: String,
    pub description: Option<String>,
    pub starts_on: Date,
    pub ends_on: Date,
    pub start_pos: MapPoint,
    pub created_at: Timestamp,
    pub archived_at: Option<Timestamp>,
}

impl Trip {
    pub fn is_archived(&self) -> bool {
        self.archived_at.is_some()
    }

    /// Number of days covered by the trip, including both the first
    /// and the last day. At least 1 for a valid trip.
    pub fn duration_days(&self) -> u32 {
        ((self.ends_on - self.starts_on).whole_days() + 1).max(0) as u32
    }

    /// The calendar date of the 1-based trip day.
    pub fn date_of_day(&self, day: u32) -> Option<Date> {
        if day < 1 || day > self.duration_days() {
            return None;
        }
        self.starts_on
            .checked_add(Duration::days(i64::from(day) - 1))
    }
}

pub type MemberRolePrimitive = i16;

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MemberRole {
    Member = 0,
    Owner  = 1,
}

impl MemberRole {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Owner => "owner",
        }
    }
}

#[derive(Debug, Error)]
#[error("Invalid member role primitive: {0}")]
pub struct InvalidMemberRolePrimitive(MemberRolePrimitive);

impl TryFrom<MemberRolePrimitive> for MemberRole {
    type Error = InvalidMemberRolePrimitive;
    fn try_from(from: MemberRolePrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidMemberRolePrimitive(from))
    }
}

impl From<MemberRole> for MemberRolePrimitive {
    fn from(from: MemberRole) -> Self {
        from.to_i16().expect("Member role primitive")
    }
}

pub type MembershipStatusPrimitive = i16;

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MembershipStatus {
    Pending  = 0,
    Accepted = 1,
    Declined = 2,
}

impl MembershipStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Declined => "declined",
        }
    }
}

#[derive(Debug, Error)]
#[error("Invalid membership status primitive: {0}")]
pub struct InvalidMembershipStatusPrimitive(MembershipStatusPrimitive);

impl TryFrom<MembershipStatusPrimitive> for MembershipStatus {
    type Error = InvalidMembershipStatusPrimitive;
    fn try_from(from: MembershipStatusPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidMembershipStatusPrimitive(from))
    }
}

impl From<MembershipStatus> for MembershipStatusPrimitive {
    fn from(from: MembershipStatus) -> Self {
        from.to_i16().expect("Membership status primitive")
    }
}

/// The pivot between a trip and a user.
///
/// One row per (trip, user) pair. The owner's row is created
/// together with the trip and is always `Accepted`.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripMembership {
    pub trip         : Id,
    pub member       : EmailAddress,
    pub role         : MemberRole,
    pub status       : MembershipStatus,
    pub invited_at   : Timestamp,
    pub responded_at : Option<Timestamp>,
}

impl TripMembership {
    pub fn is_accepted(&self) -> bool {
        self.status == MembershipStatus::Accepted
    }
}
