use std::cmp::Ordering;

use crate::entities::{
    itinerary::{ItineraryDay, ItineraryItem, TripItinerary},
    place::ExternalRating,
    time::Timestamp,
    trip::Trip,
    trip_place::TripPlace,
    vote::AvgVoteScore,
};

/// An accepted trip place together with the data that decides its
/// position in the schedule.
#[derive(Debug, Clone)]
pub struct ItineraryCandidate {
    pub trip_place: TripPlace,
    pub title: String,
    pub rating: Option<ExternalRating>,
    pub avg_vote: Option<AvgVoteScore>,
}

/// Distributes the accepted places of a trip over its days.
///
/// Places that are fixed to a day within the trip keep their slot,
/// ordered by their stored index. All remaining places are ranked by
/// the group's votes (falling back to the external rating, then the
/// title) and appended to whichever day currently holds the fewest
/// places, earliest day first.
///
/// The result always contains one entry per trip day, including days
/// that end up empty.
pub fn build_itinerary(
    trip: &Trip,
    candidates: Vec<ItineraryCandidate>,
    generated_at: Timestamp,
) -> TripItinerary {
    let day_count = trip.duration_days() as usize;
    let mut pinned: Vec<Vec<ItineraryCandidate>> = vec![Vec::new(); day_count];
    let mut floating = Vec::new();
    for candidate in candidates {
        debug_assert!(candidate.trip_place.is_accepted());
        match pinned_day(&candidate.trip_place, day_count) {
            Some(day) => pinned[day - 1].push(candidate),
            None => floating.push(candidate),
        }
    }
    for day in &mut pinned {
        day.sort_by(|a, b| {
            stored_index(a)
                .cmp(&stored_index(b))
                .then_with(|| a.title.cmp(&b.title))
        });
    }
    floating.sort_by(|a, b| {
        cmp_desc(a.avg_vote.map(f64::from), b.avg_vote.map(f64::from))
            .then_with(|| cmp_desc(a.rating.map(f64::from), b.rating.map(f64::from)))
            .then_with(|| a.title.cmp(&b.title))
    });

    let mut days: Vec<Vec<ItineraryItem>> = pinned
        .into_iter()
        .map(|candidates| candidates.into_iter().map(|c| item(c, true)).collect())
        .collect();
    for candidate in floating {
        if let Some(day) = least_loaded_day(&days) {
            days[day].push(item(candidate, false));
        }
    }
    let days = days
        .into_iter()
        .enumerate()
        .map(|(i, mut items)| {
            for (i, item) in items.iter_mut().enumerate() {
                item.order_index = i as u32 + 1;
            }
            ItineraryDay {
                day: i as u32 + 1,
                items,
            }
        })
        .collect();
    TripItinerary {
        trip: trip.id.clone(),
        generated_at,
        days,
    }
}

// A fixed place only keeps its slot if the stored day falls within
// the trip, otherwise it is scheduled like any other place.
fn pinned_day(trip_place: &TripPlace, day_count: usize) -> Option<usize> {
    if !trip_place.is_fixed {
        return None;
    }
    trip_place
        .day
        .map(|day| day as usize)
        .filter(|day| (1..=day_count).contains(day))
}

fn stored_index(candidate: &ItineraryCandidate) -> u32 {
    candidate.trip_place.order_index.unwrap_or(u32::MAX)
}

fn item(candidate: ItineraryCandidate, is_fixed: bool) -> ItineraryItem {
    ItineraryItem {
        place: candidate.trip_place.place,
        order_index: 0,
        is_fixed,
    }
}

// Descending, with missing values sorted last.
fn cmp_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn least_loaded_day(days: &[Vec<ItineraryItem>]) -> Option<usize> {
    days.iter()
        .enumerate()
        .min_by_key(|(_, items)| items.len())
        .map(|(day, _)| day)
}
