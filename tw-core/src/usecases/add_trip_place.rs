use super::prelude::*;
use crate::usecases;

#[derive(Debug, Clone)]
pub struct NewTripPlace {
    pub place: Id,
    pub day: Option<u32>,
    pub is_fixed: bool,
    pub note: Option<String>,
}

/// Attaches a catalog place to the trip.
///
/// The owner attaches places as accepted and may schedule them right
/// away. Members only propose: the place is attached as `Proposed`
/// without a schedule slot.
pub fn add_trip_place<D>(
    db: &D,
    account: &EmailAddress,
    trip_id: &Id,
    n: NewTripPlace,
) -> Result<TripPlace>
where
    D: TripRepo + MembershipRepo + PlaceRepo + TripPlaceRepo,
{
    let trip = usecases::authorize_trip_contributor(db, account, trip_id)?;
    if trip.is_archived() {
        return Err(Error::TripArchived);
    }
    let NewTripPlace {
        place,
        day,
        is_fixed,
        note,
    } = n;
    let catalog_place = db.get_place(place.as_str())?;
    if catalog_place.is_archived() {
        return Err(Error::PlaceArchived);
    }
    let is_owner = *account == trip.owner;
    if !is_owner && (is_fixed || day.is_some()) {
        return Err(Error::Forbidden);
    }
    if let Some(day) = day {
        if day < 1 || day > trip.duration_days() {
            return Err(Error::InvalidDay);
        }
    }
    let status = if is_owner {
        TripPlaceStatus::Accepted
    } else {
        TripPlaceStatus::Proposed
    };
    let trip_place = TripPlace {
        trip: trip_id.clone(),
        place: catalog_place.id,
        status,
        is_fixed,
        day,
        order_index: None,
        note: note.map(|n| n.trim().to_string()).filter(|n| !n.is_empty()),
        proposed_by: account.clone(),
        created_at: Timestamp::now(),
    };
    db.create_trip_place(&trip_place)?;
    log::info!("Attached place {} to trip {} ({})", trip_place.place, trip_id, status.as_str());
    Ok(trip_place)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use crate::{entities::builders::*, RepoError};
    use time::macros::date;

    fn fixture(db: &MockDb) -> (EmailAddress, EmailAddress, Trip, Id) {
        let owner: EmailAddress = "owner@test.org".parse().unwrap();
        let jo: EmailAddress = "jo@test.org".parse().unwrap();
        for email in [&owner, &jo] {
            db.users
                .borrow_mut()
                .push(User::build().email(email.as_str()).finish());
        }
        let n = usecases::NewTrip {
            title: "Weekender".into(),
            description: None,
            starts_on: date!(2024 - 08 - 02),
            ends_on: date!(2024 - 08 - 04),
            lat: 53.55,
            lng: 9.99,
        };
        let trip = usecases::create_trip(db, owner.clone(), n).unwrap();
        usecases::invite_member(db, &owner, &trip.id, &jo).unwrap();
        usecases::respond_to_invitation(db, &jo, &trip.id, true).unwrap();
        let place = Place::build().title("Miniatur Wunderland").finish();
        let place_id = place.id.clone();
        db.places.borrow_mut().push(place);
        (owner, jo, trip, place_id)
    }

    fn new_trip_place(place: &Id) -> NewTripPlace {
        NewTripPlace {
            place: place.clone(),
            day: None,
            is_fixed: false,
            note: None,
        }
    }

    #[test]
    fn owner_attaches_a_place() {
        let db = MockDb::default();
        let (owner, _, trip, place) = fixture(&db);
        let n = NewTripPlace {
            day: Some(2),
            is_fixed: true,
            note: Some(" right after breakfast ".into()),
            ..new_trip_place(&place)
        };
        let tp = add_trip_place(&db, &owner, &trip.id, n).unwrap();
        assert_eq!(TripPlaceStatus::Accepted, tp.status);
        assert_eq!(Some(2), tp.day);
        assert!(tp.is_fixed);
        assert_eq!(Some("right after breakfast".to_string()), tp.note);
    }

    #[test]
    fn member_proposes_a_place() {
        let db = MockDb::default();
        let (_, jo, trip, place) = fixture(&db);
        let tp = add_trip_place(&db, &jo, &trip.id, new_trip_place(&place)).unwrap();
        assert_eq!(TripPlaceStatus::Proposed, tp.status);
        assert_eq!(jo, tp.proposed_by);
    }

    #[test]
    fn member_cannot_schedule() {
        let db = MockDb::default();
        let (_, jo, trip, place) = fixture(&db);
        let n = NewTripPlace {
            day: Some(1),
            ..new_trip_place(&place)
        };
        assert!(matches!(
            add_trip_place(&db, &jo, &trip.id, n),
            Err(Error::Forbidden)
        ));
    }

    #[test]
    fn attach_twice() {
        let db = MockDb::default();
        let (owner, _, trip, place) = fixture(&db);
        add_trip_place(&db, &owner, &trip.id, new_trip_place(&place)).unwrap();
        assert!(matches!(
            add_trip_place(&db, &owner, &trip.id, new_trip_place(&place)),
            Err(Error::Repo(RepoError::AlreadyExists))
        ));
    }

    #[test]
    fn attach_an_archived_place() {
        let db = MockDb::default();
        let (owner, _, trip, _) = fixture(&db);
        let archived = Place::build().archived(Timestamp::now()).finish();
        let id = archived.id.clone();
        db.places.borrow_mut().push(archived);
        assert!(matches!(
            add_trip_place(&db, &owner, &trip.id, new_trip_place(&id)),
            Err(Error::PlaceArchived)
        ));
    }

    #[test]
    fn day_outside_the_trip() {
        let db = MockDb::default();
        let (owner, _, trip, place) = fixture(&db);
        let n = NewTripPlace {
            day: Some(4),
            ..new_trip_place(&place)
        };
        assert!(matches!(
            add_trip_place(&db, &owner, &trip.id, n),
            Err(Error::InvalidDay)
        ));
    }

    #[test]
    fn outsiders_cannot_propose() {
        let db = MockDb::default();
        let (_, _, trip, place) = fixture(&db);
        let outsider = "outsider@test.org".parse().unwrap();
        assert!(matches!(
            add_trip_place(&db, &outsider, &trip.id, new_trip_place(&place)),
            Err(Error::Forbidden)
        ));
    }
}
