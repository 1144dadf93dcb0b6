use super::prelude::*;
use crate::usecases;

/// Detaches a place from the trip, discarding its votes.
///
/// Allowed for the owner and for the member who proposed the place.
pub fn remove_trip_place<D>(
    db: &D,
    account: &EmailAddress,
    trip_id: &Id,
    place_id: &Id,
) -> Result<()>
where
    D: TripRepo + MembershipRepo + TripPlaceRepo + VoteRepo,
{
    let trip = usecases::authorize_trip_read(db, account, trip_id)?;
    if trip.is_archived() {
        return Err(Error::TripArchived);
    }
    let trip_place = db.get_trip_place(trip_id, place_id)?;
    if *account != trip.owner && *account != trip_place.proposed_by {
        return Err(Error::Forbidden);
    }
    db.delete_trip_place(trip_id, place_id)?;
    let votes = db.delete_votes_for_place(trip_id, place_id)?;
    log::info!("Detached place {} from trip {} ({} votes dropped)", place_id, trip_id, votes);
    Ok(())
}
