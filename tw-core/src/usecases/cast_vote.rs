use std::collections::HashMap;

use super::prelude::*;
use crate::{usecases, voting::summarize_votes};

/// Casts or replaces the caller's vote for an attached place.
pub fn cast_vote<D>(
    db: &D,
    account: &EmailAddress,
    trip_id: &Id,
    place_id: &Id,
    score: u8,
) -> Result<PlaceVote>
where
    D: TripRepo + MembershipRepo + TripPlaceRepo + VoteRepo,
{
    let trip = usecases::authorize_trip_contributor(db, account, trip_id)?;
    if trip.is_archived() {
        return Err(Error::TripArchived);
    }
    // Votes only apply to places attached to the trip.
    db.get_trip_place(trip_id, place_id)?;
    let score = VoteScore::try_from(score)?;
    let vote = PlaceVote {
        trip: trip_id.clone(),
        place: place_id.clone(),
        voter: account.clone(),
        score,
        cast_at: Timestamp::now(),
    };
    db.upsert_vote(&vote)?;
    log::debug!("{} voted {} for place {} of trip {}", account, u8::from(score), place_id, trip_id);
    Ok(vote)
}

/// The trip-wide voting result for one place, together with the
/// caller's own score.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceVoteSummary {
    pub place      : Id,
    pub average    : Option<AvgVoteScore>,
    pub vote_count : u64,
    pub own_score  : Option<VoteScore>,
}

/// Aggregates all votes of the trip by place.
pub fn vote_summary<D>(
    db: &D,
    account: &EmailAddress,
    trip_id: &Id,
) -> Result<Vec<PlaceVoteSummary>>
where
    D: TripRepo + MembershipRepo + VoteRepo,
{
    usecases::authorize_trip_read(db, account, trip_id)?;
    let votes = db.votes_of_trip(trip_id)?;
    let own: HashMap<_, _> = votes
        .iter()
        .filter(|v| v.voter == *account)
        .map(|v| (v.place.clone(), v.score))
        .collect();
    Ok(summarize_votes(votes)
        .into_iter()
        .map(|s| PlaceVoteSummary {
            own_score: own.get(&s.place).copied(),
            place: s.place,
            average: s.average,
            vote_count: s.vote_count,
        })
        .collect())
}
