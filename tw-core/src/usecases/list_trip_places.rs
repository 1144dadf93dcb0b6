use super::prelude::*;
use crate::usecases;

/// A place attached to the trip, joined with its catalog record.
#[derive(Debug, Clone, PartialEq)]
pub struct TripPlaceDetails {
    pub trip_place: TripPlace,
    pub place: Place,
}

pub fn list_trip_places<D>(
    db: &D,
    account: &EmailAddress,
    trip_id: &Id,
) -> Result<Vec<TripPlaceDetails>>
where
    D: TripRepo + MembershipRepo + TripPlaceRepo + PlaceRepo,
{
    usecases::authorize_trip_read(db, account, trip_id)?;
    let trip_places = db.trip_places(trip_id)?;
    let ids: Vec<_> = trip_places.iter().map(|tp| tp.place.as_str()).collect();
    let places = db.get_places(&ids)?;
    Ok(trip_places
        .into_iter()
        .filter_map(|trip_place| {
            places
                .iter()
                .find(|p| p.id == trip_place.place)
                .cloned()
                .map(|place| TripPlaceDetails { trip_place, place })
        })
        .collect())
}
