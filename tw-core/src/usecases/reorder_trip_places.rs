use super::prelude::*;
use crate::usecases;

/// Applies a bulk day/order assignment to the trip's places.
///
/// Owner only. Fails without changes if any slot references a day
/// outside the trip or a place that is not attached.
pub fn reorder_trip_places<D>(
    db: &D,
    owner: &EmailAddress,
    trip_id: &Id,
    slots: &[TripPlaceSlot],
) -> Result<usize>
where
    D: TripRepo + MembershipRepo + TripPlaceRepo,
{
    let trip = usecases::authorize_trip_owner(db, owner, trip_id)?;
    if trip.is_archived() {
        return Err(Error::TripArchived);
    }
    let day_count = trip.duration_days();
    for slot in slots {
        if let Some(day) = slot.day {
            if day < 1 || day > day_count {
                return Err(Error::InvalidDay);
            }
        }
    }
    let updated = db.reorder_trip_places(trip_id, slots)?;
    log::info!("Reordered {} places of trip {}", updated, trip_id);
    Ok(updated)
}
