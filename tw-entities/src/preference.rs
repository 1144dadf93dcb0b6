use crate::{email::EmailAddress, id::Id, time::Timestamp};

/// A user's affinity for a place category: 0 (avoid), 1 (neutral),
/// 2 (favorite). Out-of-range input clamps instead of failing.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct PreferenceScore(u8);

impl PreferenceScore {
    pub const fn min() -> Self {
        Self(0)
    }

    pub const fn max() -> Self {
        Self(2)
    }

    /// The neutral mid-scale value assumed for users that never
    /// scored a category.
    pub const fn neutral() -> Self {
        Self(1)
    }

    pub fn clamped<I: Into<i64>>(val: I) -> Self {
        let val = val.into();
        let min = i64::from(Self::min().0);
        let max = i64::from(Self::max().0);
        Self(val.clamp(min, max) as u8)
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }
}

impl Default for PreferenceScore {
    fn default() -> Self {
        Self::neutral()
    }
}

impl From<PreferenceScore> for u8 {
    fn from(from: PreferenceScore) -> Self {
        from.0
    }
}

impl From<PreferenceScore> for f64 {
    fn from(from: PreferenceScore) -> Self {
        f64::from(from.0)
    }
}

/// The preference of one user for one category.
///
/// Unique per (user, category).
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPreference {
    pub user       : EmailAddress,
    pub category   : Id,
    pub score      : PreferenceScore,
    pub updated_at : Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_out_of_range_scores() {
        assert_eq!(PreferenceScore::max(), PreferenceScore::clamped(7));
        assert_eq!(PreferenceScore::min(), PreferenceScore::clamped(-3));
        assert_eq!(PreferenceScore::neutral(), PreferenceScore::clamped(1));
        assert!(PreferenceScore::clamped(100).is_valid());
    }
}
