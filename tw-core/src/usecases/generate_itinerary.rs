use super::prelude::*;
use crate::{
    itinerary::{build_itinerary, ItineraryCandidate},
    usecases,
    voting::Voted,
};

/// Builds a fresh itinerary from the trip's accepted places.
///
/// The result is not persisted; callers decide whether to cache it.
pub fn generate_itinerary<D>(db: &D, account: &EmailAddress, trip_id: &Id) -> Result<TripItinerary>
where
    D: TripRepo + MembershipRepo + TripPlaceRepo + PlaceRepo + VoteRepo,
{
    let trip = usecases::authorize_trip_read(db, account, trip_id)?;
    let accepted: Vec<_> = db
        .trip_places(trip_id)?
        .into_iter()
        .filter(|tp| tp.is_accepted())
        .collect();
    let ids: Vec<_> = accepted.iter().map(|tp| tp.place.as_str()).collect();
    let places = db.get_places(&ids)?;
    let votes = db.votes_of_trip(trip_id)?;
    let candidates = accepted
        .into_iter()
        .filter_map(|trip_place| {
            let place = places.iter().find(|p| p.id == trip_place.place)?;
            let place_votes: Vec<_> = votes
                .iter()
                .filter(|v| v.place == trip_place.place)
                .cloned()
                .collect();
            Some(ItineraryCandidate {
                avg_vote: trip_place.avg_votes(&place_votes),
                title: place.title.clone(),
                rating: place.rating,
                trip_place,
            })
        })
        .collect();
    Ok(build_itinerary(&trip, candidates, Timestamp::now()))
}
