use itertools::Itertools;

use crate::entities::{id::Id, trip_place::TripPlace, vote::*};

pub trait Voted {
    fn avg_votes(&self, _: &[PlaceVote]) -> Option<AvgVoteScore>;
}

impl Voted for TripPlace {
    fn avg_votes(&self, votes: &[PlaceVote]) -> Option<AvgVoteScore> {
        debug_assert_eq!(
            votes.len(),
            votes
                .iter()
                .filter(|v| v.trip == self.trip && v.place == self.place)
                .count()
        );
        votes
            .iter()
            .map(|v| v.score)
            .collect::<AvgVoteScoreBuilder>()
            .build()
    }
}

/// Aggregated voting result for one place of a trip.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct VoteSummary {
    pub place      : Id,
    pub average    : Option<AvgVoteScore>,
    pub vote_count : u64,
}

/// Groups the trip's votes by place.
///
/// Places without votes do not appear in the result.
pub fn summarize_votes(mut votes: Vec<PlaceVote>) -> Vec<VoteSummary> {
    votes.sort_by(|a, b| a.place.cmp(&b.place));
    votes
        .into_iter()
        .chunk_by(|v| v.place.clone())
        .into_iter()
        .map(|(place, group)| {
            let builder: AvgVoteScoreBuilder = group.map(|v| v.score).collect();
            VoteSummary {
                place,
                vote_count: builder.count() as u64,
                average: builder.build(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::time::Timestamp;

    fn vote(place: &str, voter: &str, score: u8) -> PlaceVote {
        PlaceVote {
            trip: "t".into(),
            place: place.into(),
            voter: voter.parse().unwrap(),
            score: VoteScore::try_from(score).unwrap(),
            cast_at: Timestamp::now(),
        }
    }

    #[test]
    fn summarize_groups_by_place() {
        let votes = vec![
            vote("a", "x@test.org", 5),
            vote("b", "x@test.org", 2),
            vote("a", "y@test.org", 3),
        ];
        let mut summaries = summarize_votes(votes);
        summaries.sort_by(|a, b| a.place.cmp(&b.place));
        assert_eq!(2, summaries.len());
        assert_eq!(2, summaries[0].vote_count);
        assert_eq!(4.0, f64::from(summaries[0].average.unwrap()));
        assert_eq!(1, summaries[1].vote_count);
        assert_eq!(2.0, f64::from(summaries[1].average.unwrap()));
    }

    #[test]
    fn summarize_no_votes() {
        assert!(summarize_votes(vec![]).is_empty());
    }

    #[test]
    fn avg_votes_of_trip_place() {
        let tp = TripPlace {
            trip: "t".into(),
            place: "a".into(),
            status: crate::entities::trip_place::TripPlaceStatus::Accepted,
            is_fixed: false,
            day: None,
            order_index: None,
            note: None,
            proposed_by: "x@test.org".parse().unwrap(),
            created_at: Timestamp::now(),
        };
        assert_eq!(None, tp.avg_votes(&[]));
        let votes = [vote("a", "x@test.org", 4), vote("a", "y@test.org", 5)];
        assert_eq!(4.5, f64::from(tp.avg_votes(&votes).unwrap()));
    }
}
