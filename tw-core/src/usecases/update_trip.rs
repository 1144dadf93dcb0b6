use time::Date;

use super::prelude::*;
use crate::{
    usecases,
    util::validate::{AutoCorrect, Validate},
};

#[derive(Debug, Clone)]
pub struct UpdateTrip {
    pub title: String,
    pub description: Option<String>,
    pub starts_on: Date,
    pub ends_on: Date,
    pub lat: f64,
    pub lng: f64,
}

pub fn update_trip<D>(db: &D, owner: &EmailAddress, trip_id: &Id, u: UpdateTrip) -> Result<Trip>
where
    D: TripRepo + MembershipRepo,
{
    let UpdateTrip {
        title,
        description,
        starts_on,
        ends_on,
        lat,
        lng,
    } = u;
    let mut trip = usecases::authorize_trip_owner(db, owner, trip_id)?;
    if trip.is_archived() {
        return Err(Error::TripArchived);
    }
    trip.title = title;
    trip.description = description;
    trip.starts_on = starts_on;
    trip.ends_on = ends_on;
    trip.start_pos =
        MapPoint::try_from_lat_lng_deg(lat, lng).map_err(|_| Error::InvalidPosition)?;
    let trip = trip.auto_correct();
    trip.validate()?;
    db.update_trip(&trip)?;
    log::info!("Updated trip {}", trip.id);
    Ok(trip)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use time::macros::date;

    fn stored_trip(db: &MockDb, owner: &EmailAddress) -> Trip {
        let n = usecases::NewTrip {
            title: "Weekender".into(),
            description: None,
            starts_on: date!(2024 - 08 - 02),
            ends_on: date!(2024 - 08 - 04),
            lat: 53.55,
            lng: 9.99,
        };
        usecases::create_trip(db, owner.clone(), n).unwrap()
    }

    fn changes() -> UpdateTrip {
        UpdateTrip {
            title: "Long weekender".into(),
            description: Some("Now with one more day".into()),
            starts_on: date!(2024 - 08 - 02),
            ends_on: date!(2024 - 08 - 05),
            lat: 53.55,
            lng: 9.99,
        }
    }

    #[test]
    fn owner_updates_the_trip() {
        let db = MockDb::default();
        let owner: EmailAddress = "owner@test.org".parse().unwrap();
        let trip = stored_trip(&db, &owner);
        let updated = update_trip(&db, &owner, &trip.id, changes()).unwrap();
        assert_eq!("Long weekender", updated.title);
        assert_eq!(4, updated.duration_days());
        assert_eq!("Long weekender", db.trips.borrow()[0].title);
    }

    #[test]
    fn members_cannot_update_the_trip() {
        let db = MockDb::default();
        let owner: EmailAddress = "owner@test.org".parse().unwrap();
        let trip = stored_trip(&db, &owner);
        let other: EmailAddress = "other@test.org".parse().unwrap();
        assert!(matches!(
            update_trip(&db, &other, &trip.id, changes()),
            Err(Error::Forbidden)
        ));
    }

    #[test]
    fn archived_trips_are_immutable() {
        let db = MockDb::default();
        let owner: EmailAddress = "owner@test.org".parse().unwrap();
        let trip = stored_trip(&db, &owner);
        db.trips.borrow_mut()[0].archived_at = Some(Timestamp::now());
        assert!(matches!(
            update_trip(&db, &owner, &trip.id, changes()),
            Err(Error::TripArchived)
        ));
    }
}
