use super::prelude::*;
use crate::usecases;

/// Archives the trip instead of deleting it. Archived trips stay
/// readable for their members but reject any modification.
pub fn archive_trip<D>(db: &D, owner: &EmailAddress, trip_id: &Id) -> Result<Trip>
where
    D: TripRepo + ItineraryRepo,
{
    let mut trip = usecases::authorize_trip_owner(db, owner, trip_id)?;
    if trip.is_archived() {
        return Ok(trip);
    }
    trip.archived_at = Some(Timestamp::now());
    db.update_trip(&trip)?;
    // The cached schedule would only go stale.
    db.delete_itinerary(trip_id)?;
    log::info!("Archived trip {}", trip.id);
    Ok(trip)
}
