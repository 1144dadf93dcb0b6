use super::prelude::*;
use crate::{
    recommend::{self, RecommendedPlace},
    usecases,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationQuery {
    pub radius: Option<Distance>,
    pub limit: Option<usize>,
}

/// Recommends catalog places for the trip.
///
/// Candidates are unarchived places around the trip's start location
/// that are not yet attached, ranked by the weighted score of rating,
/// popularity and the group's category preferences.
pub fn recommend_places<D>(
    db: &D,
    account: &EmailAddress,
    trip_id: &Id,
    query: RecommendationQuery,
) -> Result<Vec<RecommendedPlace>>
where
    D: TripRepo + MembershipRepo + TripPlaceRepo + PlaceRepo + PreferenceRepo,
{
    let trip = usecases::authorize_trip_read(db, account, trip_id)?;
    let radius = query.radius.unwrap_or(recommend::DEFAULT_RADIUS);
    if !radius.is_valid() || radius.to_meters() <= 0.0 || radius > recommend::MAX_RADIUS {
        return Err(Error::InvalidRadius);
    }
    let limit = query.limit.unwrap_or(recommend::DEFAULT_LIMIT);
    if limit < 1 || limit > recommend::MAX_LIMIT {
        return Err(Error::InvalidLimit);
    }
    // The group is the owner plus everyone who accepted.
    let members: Vec<_> = db
        .memberships_of_trip(trip_id)?
        .into_iter()
        .filter(|m| m.is_accepted())
        .map(|m| m.member)
        .collect();
    let preferences = db.preferences_of_users(&members)?;
    let attached = db.place_ids_of_trip(trip_id)?;
    // Overfetch so that dropping already-attached places does not
    // fall short of the limit.
    let pagination = Pagination {
        offset: None,
        limit: Some((limit + attached.len()) as u64),
    };
    let candidates: Vec<_> = db
        .find_places_near(trip.start_pos, radius, &[], &pagination)?
        .into_iter()
        .filter(|(place, _)| !attached.contains(&place.id))
        .collect();
    log::debug!("Ranking {} candidates for trip {}", candidates.len(), trip_id);
    Ok(recommend::rank_candidates(candidates, &preferences, limit))
}
