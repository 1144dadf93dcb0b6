use std::cmp::Ordering;
use std::collections::HashMap;

use crate::entities::{
    geo::Distance,
    id::Id,
    place::{ExternalRating, Place},
    preference::{PreferenceScore, UserPreference},
};

// Weights of the scoring components, summing up to 1.0 so that the
// total score stays within [0.0, 1.0].
const WEIGHT_RATING: f64 = 0.4;
const WEIGHT_POPULARITY: f64 = 0.2;
const WEIGHT_PREFERENCE: f64 = 0.4;

pub const DEFAULT_RADIUS: Distance = Distance::from_meters(10_000.0);
pub const MAX_RADIUS: Distance = Distance::from_meters(50_000.0);

pub const DEFAULT_LIMIT: usize = 10;
pub const MAX_LIMIT: usize = 50;

/// The score of a recommended place, broken down into its
/// weighted components.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommendationScore {
    pub total      : f64,
    pub rating     : f64,
    pub popularity : f64,
    pub preference : f64,
}

#[derive(Debug, Clone)]
pub struct RecommendedPlace {
    pub place: Place,
    pub distance: Distance,
    pub score: RecommendationScore,
}

/// Ranks candidate places for a group of travelers.
///
/// The score per candidate is the weighted sum of
///
/// - the external star rating, normalized to [0, 1],
/// - its popularity, i.e. the number of external ratings on a log
///   scale relative to the most-rated candidate,
/// - the group's average preference for the candidate's category,
///   normalized to [0, 1].
///
/// `preferences` are the stored scores of the group members. The
/// group preference for a category is their plain average; the
/// neutral mid-scale value applies when nobody scored the category.
///
/// Ties are broken by the external rating and then by the title, so
/// the ranking is deterministic.
pub fn rank_candidates(
    candidates: Vec<(Place, Distance)>,
    preferences: &[UserPreference],
    limit: usize,
) -> Vec<RecommendedPlace> {
    let max_rating_count = candidates
        .iter()
        .map(|(place, _)| place.rating_count)
        .max()
        .unwrap_or(0);
    let preferences_by_category = group_preferences(preferences);
    let mut ranked: Vec<_> = candidates
        .into_iter()
        .map(|(place, distance)| {
            let score = score_place(&place, max_rating_count, &preferences_by_category);
            RecommendedPlace {
                place,
                distance,
                score,
            }
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.score
            .total
            .partial_cmp(&a.score.total)
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                cmp_rating_desc(a.place.rating.map(f64::from), b.place.rating.map(f64::from))
            })
            .then_with(|| a.place.title.cmp(&b.place.title))
    });
    ranked.truncate(limit);
    ranked
}

fn score_place(
    place: &Place,
    max_rating_count: u64,
    group_preferences: &HashMap<Id, f64>,
) -> RecommendationScore {
    let rating = rating_component(place.rating);
    let popularity = popularity_component(place.rating_count, max_rating_count);
    let preference = group_preferences
        .get(&place.category)
        .copied()
        .unwrap_or_else(|| f64::from(PreferenceScore::neutral()))
        / f64::from(PreferenceScore::max());
    let total =
        WEIGHT_RATING * rating + WEIGHT_POPULARITY * popularity + WEIGHT_PREFERENCE * preference;
    RecommendationScore {
        total,
        rating,
        popularity,
        preference,
    }
}

fn rating_component(rating: Option<ExternalRating>) -> f64 {
    rating
        .map(|r| f64::from(r.clamp()) / f64::from(ExternalRating::max()))
        .unwrap_or(0.0)
}

fn popularity_component(rating_count: u64, max_rating_count: u64) -> f64 {
    if max_rating_count == 0 {
        return 0.0;
    }
    (1.0 + rating_count as f64).ln() / (1.0 + max_rating_count as f64).ln()
}

// Average stored score per category over all members that scored it.
fn group_preferences(preferences: &[UserPreference]) -> HashMap<Id, f64> {
    let mut sums: HashMap<Id, (i64, i64)> = HashMap::new();
    for preference in preferences {
        let (sum, count) = sums.entry(preference.category.clone()).or_default();
        *sum += i64::from(u8::from(preference.score));
        *count += 1;
    }
    sums.into_iter()
        .map(|(category, (sum, count))| (category, sum as f64 / count as f64))
        .collect()
}

// Descending, with unrated candidates last.
fn cmp_rating_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
