use super::prelude::*;
use crate::usecases;

/// Full replacement of the mutable pivot fields.
#[rustfmt::skip]
#[derive(Debug, Clone)]
pub struct UpdateTripPlace {
    pub status      : TripPlaceStatus,
    pub is_fixed    : bool,
    pub day         : Option<u32>,
    pub order_index : Option<u32>,
    pub note        : Option<String>,
}

/// Updates a place attached to the trip.
///
/// Status and schedule slot are owner-only. The note may also be
/// edited by whoever proposed the place.
pub fn update_trip_place<D>(
    db: &D,
    account: &EmailAddress,
    trip_id: &Id,
    place_id: &Id,
    u: UpdateTripPlace,
) -> Result<TripPlace>
where
    D: TripRepo + MembershipRepo + TripPlaceRepo,
{
    let trip = usecases::authorize_trip_read(db, account, trip_id)?;
    if trip.is_archived() {
        return Err(Error::TripArchived);
    }
    let mut trip_place = db.get_trip_place(trip_id, place_id)?;
    let UpdateTripPlace {
        status,
        is_fixed,
        day,
        order_index,
        note,
    } = u;
    let note = note.map(|n| n.trim().to_string()).filter(|n| !n.is_empty());
    let is_owner = *account == trip.owner;
    let schedule_changed = status != trip_place.status
        || is_fixed != trip_place.is_fixed
        || day != trip_place.day
        || order_index != trip_place.order_index;
    if schedule_changed && !is_owner {
        return Err(Error::Forbidden);
    }
    if note != trip_place.note && !is_owner && *account != trip_place.proposed_by {
        return Err(Error::Forbidden);
    }
    if let Some(day) = day {
        if day < 1 || day > trip.duration_days() {
            return Err(Error::InvalidDay);
        }
    }
    trip_place.status = status;
    trip_place.is_fixed = is_fixed;
    trip_place.day = day;
    trip_place.order_index = order_index;
    trip_place.note = note;
    db.update_trip_place(&trip_place)?;
    log::info!("Updated place {} of trip {}", place_id, trip_id);
    Ok(trip_place)
}
