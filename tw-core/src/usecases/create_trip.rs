use time::Date;

use super::prelude::*;
use crate::util::validate::{AutoCorrect, Validate};

#[derive(Debug, Clone)]
pub struct NewTrip {
    pub title: String,
    pub description: Option<String>,
    pub starts_on: Date,
    pub ends_on: Date,
    pub lat: f64,
    pub lng: f64,
}

pub fn create_trip<D>(db: &D, owner: EmailAddress, n: NewTrip) -> Result<Trip>
where
    D: TripRepo + MembershipRepo,
{
    let NewTrip {
        title,
        description,
        starts_on,
        ends_on,
        lat,
        lng,
    } = n;
    let start_pos =
        MapPoint::try_from_lat_lng_deg(lat, lng).map_err(|_| Error::InvalidPosition)?;
    let created_at = Timestamp::now();
    let trip = Trip {
        id: Id::new(),
        owner: owner.clone(),
        title,
        description,
        starts_on,
        ends_on,
        start_pos,
        created_at,
        archived_at: None,
    }
    .auto_correct();
    trip.validate()?;
    db.create_trip(&trip)?;
    // The owner takes part from the start; the membership row makes
    // member queries uniform.
    db.create_membership(&TripMembership {
        trip: trip.id.clone(),
        member: owner,
        role: MemberRole::Owner,
        status: MembershipStatus::Accepted,
        invited_at: created_at,
        responded_at: Some(created_at),
    })?;
    log::info!("Created trip {} ({})", trip.id, trip.title);
    Ok(trip)
}
