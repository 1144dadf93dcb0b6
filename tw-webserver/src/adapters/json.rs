pub use tw_boundary::*;

use tw_core::{recommend, repositories, usecases};
use tw_entities as e;

pub mod from_json {
    //! JSON -> Entity

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the entities both are outside this crate.

    pub fn new_place(p: NewPlace) -> usecases::NewPlace {
        let NewPlace {
            title,
            description,
            lat,
            lng,
            street,
            zip,
            city,
            country,
            category,
            rating,
            rating_count,
            image_url,
        } = p;
        let address = e::address::Address {
            street,
            zip,
            city,
            country,
        };
        usecases::NewPlace {
            title,
            description,
            lat,
            lng,
            category: category.into(),
            address: (!address.is_empty()).then_some(address),
            rating,
            rating_count: rating_count.unwrap_or(0),
            image_url,
        }
    }

    pub fn update_place(p: UpdatePlace) -> usecases::UpdatePlace {
        let UpdatePlace {
            title,
            description,
            lat,
            lng,
            street,
            zip,
            city,
            country,
            category,
            rating,
            rating_count,
            image_url,
        } = p;
        let address = e::address::Address {
            street,
            zip,
            city,
            country,
        };
        usecases::UpdatePlace {
            title,
            description,
            lat,
            lng,
            category: category.into(),
            address: (!address.is_empty()).then_some(address),
            rating,
            rating_count: rating_count.unwrap_or(0),
            image_url,
        }
    }

    pub fn new_trip(t: NewTrip) -> usecases::NewTrip {
        let NewTrip {
            title,
            description,
            starts_on,
            ends_on,
            lat,
            lng,
        } = t;
        usecases::NewTrip {
            title,
            description,
            starts_on,
            ends_on,
            lat,
            lng,
        }
    }

    pub fn update_trip(t: UpdateTrip) -> usecases::UpdateTrip {
        let UpdateTrip {
            title,
            description,
            starts_on,
            ends_on,
            lat,
            lng,
        } = t;
        usecases::UpdateTrip {
            title,
            description,
            starts_on,
            ends_on,
            lat,
            lng,
        }
    }

    pub fn new_trip_place(tp: NewTripPlace) -> usecases::NewTripPlace {
        let NewTripPlace {
            place,
            day,
            is_fixed,
            note,
        } = tp;
        usecases::NewTripPlace {
            place: place.into(),
            day,
            is_fixed: is_fixed.unwrap_or(false),
            note,
        }
    }

    pub fn update_trip_place(tp: UpdateTripPlace) -> usecases::UpdateTripPlace {
        let UpdateTripPlace {
            status,
            is_fixed,
            day,
            order_index,
            note,
        } = tp;
        usecases::UpdateTripPlace {
            status: status.into(),
            is_fixed,
            day,
            order_index,
            note,
        }
    }

    pub fn trip_place_slot(s: TripPlaceSlot) -> repositories::TripPlaceSlot {
        let TripPlaceSlot {
            place,
            day,
            order_index,
        } = s;
        repositories::TripPlaceSlot {
            place: place.into(),
            day,
            order_index,
        }
    }

    pub fn new_preference(p: NewPreference) -> usecases::NewPreference {
        let NewPreference { category, score } = p;
        usecases::NewPreference {
            category: category.into(),
            score,
        }
    }
}

pub mod to_json {
    //! Entity -> JSON

    use super::*;

    pub fn trip_place(details: usecases::TripPlaceDetails) -> TripPlace {
        let usecases::TripPlaceDetails { trip_place, place } = details;
        let e::trip_place::TripPlace {
            trip: _,
            place: _,
            status,
            is_fixed,
            day,
            order_index,
            note,
            proposed_by,
            created_at,
        } = trip_place;
        TripPlace {
            place: place.into(),
            status: status.into(),
            is_fixed,
            day,
            order_index,
            note,
            proposed_by: proposed_by.into_string(),
            created_at: created_at.as_secs(),
        }
    }

    pub fn recommended_place(r: recommend::RecommendedPlace) -> RecommendedPlace {
        let recommend::RecommendedPlace {
            place,
            distance,
            score,
        } = r;
        let recommend::RecommendationScore {
            total,
            rating,
            popularity,
            preference,
        } = score;
        RecommendedPlace {
            place: place.into(),
            distance_meters: distance.to_meters(),
            score: RecommendationScore {
                total,
                rating,
                popularity,
                preference,
            },
        }
    }

    /// The itinerary only stores 1-based day numbers, the calendar
    /// dates are derived from the trip.
    pub fn itinerary(itinerary: e::itinerary::TripItinerary, trip: &e::trip::Trip) -> TripItinerary {
        let e::itinerary::TripItinerary {
            trip: trip_id,
            generated_at,
            days,
        } = itinerary;
        TripItinerary {
            trip: trip_id.into(),
            generated_at: generated_at.as_secs(),
            days: days
                .into_iter()
                .map(|d| {
                    let e::itinerary::ItineraryDay { day, items } = d;
                    ItineraryDay {
                        day,
                        date: trip.date_of_day(day),
                        items: items.into_iter().map(Into::into).collect(),
                    }
                })
                .collect(),
        }
    }

    pub fn vote_summary(summary: usecases::PlaceVoteSummary) -> PlaceVoteSummary {
        let usecases::PlaceVoteSummary {
            place,
            average,
            vote_count,
            own_score,
        } = summary;
        PlaceVoteSummary {
            place: place.into(),
            average: average.map(f64::from),
            vote_count,
            own_score: own_score.map(u8::from),
        }
    }

    pub fn data_deletion_status(entry: e::activity::AuditLogEntry) -> DataDeletionStatus {
        DataDeletionStatus {
            confirmation_code: entry.id.into(),
            status: "complete".to_string(),
            requested_at: entry.activity.at.as_millis(),
        }
    }
}
