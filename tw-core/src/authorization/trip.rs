use tw_entities::{email::EmailAddress, trip::Trip, trip::TripMembership};

use std::result::Result as StdResult;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("not a trip member")]
    NotAMember,
    #[error("membership not accepted")]
    NotAccepted,
    #[error("not the trip owner")]
    NotTheOwner,
}

pub type Result<T> = StdResult<T, Error>;

/// Grants read access to the owner and to every invited user,
/// including those that have not answered yet or declined.
pub fn authorize_trip_read(
    trip: &Trip,
    email: &EmailAddress,
    memberships: &[TripMembership],
) -> Result<()> {
    if &trip.owner == email {
        return Ok(());
    }
    if memberships.iter().any(|m| &m.member == email) {
        return Ok(());
    }
    Err(Error::NotAMember)
}

/// Grants contributor access (voting, proposing places) to the owner
/// and to members that accepted their invitation.
pub fn authorize_trip_contributor(
    trip: &Trip,
    email: &EmailAddress,
    memberships: &[TripMembership],
) -> Result<()> {
    if &trip.owner == email {
        return Ok(());
    }
    match memberships.iter().find(|m| &m.member == email) {
        Some(m) if m.is_accepted() => Ok(()),
        Some(_) => Err(Error::NotAccepted),
        None => Err(Error::NotAMember),
    }
}

pub fn authorize_trip_owner(trip: &Trip, email: &EmailAddress) -> Result<()> {
    if &trip.owner == email {
        return Ok(());
    }
    Err(Error::NotTheOwner)
}
