use thiserror::Error;

use crate::{email::EmailAddress, id::Id, time::Timestamp};

/// A member's score for a place within a trip, 1 (avoid) to 5 (must
/// see). Out-of-range scores are rejected, not clamped.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct VoteScore(u8);

impl VoteScore {
    pub fn new(val: u8) -> Self {
        let new = Self(val);
        debug_assert!(new.is_valid());
        new
    }

    pub const fn min() -> Self {
        Self(1)
    }

    pub const fn max() -> Self {
        Self(5)
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }
}

#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
#[error("Vote score out of range: {0}")]
pub struct InvalidVoteScore(u8);

impl TryFrom<u8> for VoteScore {
    type Error = InvalidVoteScore;
    fn try_from(from: u8) -> Result<Self, Self::Error> {
        let new = Self(from);
        if new.is_valid() {
            Ok(new)
        } else {
            Err(InvalidVoteScore(from))
        }
    }
}

impl From<VoteScore> for u8 {
    fn from(from: VoteScore) -> Self {
        from.0
    }
}

impl From<VoteScore> for f64 {
    fn from(from: VoteScore) -> Self {
        f64::from(from.0)
    }
}

/// One vote of one member for one place of a trip.
///
/// Unique per (trip, place, voter); casting again replaces the
/// previous score.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceVote {
    pub trip    : Id,
    pub place   : Id,
    pub voter   : EmailAddress,
    pub score   : VoteScore,
    pub cast_at : Timestamp,
}

/// Average vote score of a place, only defined when at least one
/// vote has been cast.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct AvgVoteScore(f64);

impl AvgVoteScore {
    pub fn is_valid(self) -> bool {
        self.0.is_finite()
            && self.0 >= f64::from(VoteScore::min())
            && self.0 <= f64::from(VoteScore::max())
    }
}

impl From<AvgVoteScore> for f64 {
    fn from(from: AvgVoteScore) -> Self {
        from.0
    }
}

impl From<f64> for AvgVoteScore {
    fn from(from: f64) -> Self {
        Self(from)
    }
}

#[derive(Debug, Default, Clone)]
pub struct AvgVoteScoreBuilder {
    acc: u64,
    cnt: usize,
}

impl AvgVoteScoreBuilder {
    pub fn add(&mut self, val: VoteScore) {
        debug_assert!(val.is_valid());
        self.acc += u64::from(u8::from(val));
        self.cnt += 1;
    }

    pub fn count(&self) -> usize {
        self.cnt
    }

    pub fn build(self) -> Option<AvgVoteScore> {
        if self.cnt > 0 {
            Some(AvgVoteScore(self.acc as f64 / self.cnt as f64))
        } else {
            None
        }
    }
}

impl FromIterator<VoteScore> for AvgVoteScoreBuilder {
    fn from_iter<I: IntoIterator<Item = VoteScore>>(iter: I) -> Self {
        let mut builder = Self::default();
        for score in iter {
            builder.add(score);
        }
        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_range() {
        assert!(VoteScore::try_from(0).is_err());
        assert!(VoteScore::try_from(6).is_err());
        assert!(VoteScore::try_from(1).is_ok());
        assert!(VoteScore::try_from(5).is_ok());
    }

    #[test]
    fn average_of_votes() {
        let avg = [4, 5, 3]
            .into_iter()
            .map(|v| VoteScore::try_from(v).unwrap())
            .collect::<AvgVoteScoreBuilder>()
            .build()
            .unwrap();
        assert_eq!(4.0, f64::from(avg));
        assert!(avg.is_valid());
    }

    #[test]
    fn average_of_no_votes() {
        assert_eq!(None, AvgVoteScoreBuilder::default().build());
    }
}
