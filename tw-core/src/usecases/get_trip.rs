use super::prelude::*;
use crate::usecases;

pub fn get_trip<D>(db: &D, email: &EmailAddress, trip_id: &Id) -> Result<Trip>
where
    D: TripRepo + MembershipRepo,
{
    usecases::authorize_trip_read(db, email, trip_id)
}

/// All trips the user owns or has been invited to, except those
/// whose invitation they declined.
pub fn list_trips<D>(db: &D, email: &EmailAddress) -> Result<Vec<Trip>>
where
    D: TripRepo,
{
    Ok(db.trips_of_user(email)?)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use time::macros::date;

    fn stored_trip(db: &MockDb, owner: &str) -> Trip {
        let n = usecases::NewTrip {
            title: "Weekender".into(),
            description: None,
            starts_on: date!(2024 - 08 - 02),
            ends_on: date!(2024 - 08 - 04),
            lat: 53.55,
            lng: 9.99,
        };
        usecases::create_trip(db, owner.parse().unwrap(), n).unwrap()
    }

    #[test]
    fn trips_are_visible_to_their_members_only() {
        let db = MockDb::default();
        let trip = stored_trip(&db, "owner@test.org");
        let owner = "owner@test.org".parse().unwrap();
        let stranger = "stranger@test.org".parse().unwrap();
        assert!(get_trip(&db, &owner, &trip.id).is_ok());
        assert!(matches!(
            get_trip(&db, &stranger, &trip.id),
            Err(Error::Forbidden)
        ));
    }

    #[test]
    fn listing_skips_declined_invitations() {
        let db = MockDb::default();
        let trip = stored_trip(&db, "owner@test.org");
        let other = stored_trip(&db, "other@test.org");
        let jo: EmailAddress = "jo@test.org".parse().unwrap();
        db.memberships.borrow_mut().push(TripMembership {
            trip: trip.id.clone(),
            member: jo.clone(),
            role: MemberRole::Member,
            status: MembershipStatus::Pending,
            invited_at: Timestamp::now(),
            responded_at: None,
        });
        db.memberships.borrow_mut().push(TripMembership {
            trip: other.id.clone(),
            member: jo.clone(),
            role: MemberRole::Member,
            status: MembershipStatus::Declined,
            invited_at: Timestamp::now(),
            responded_at: Some(Timestamp::now()),
        });
        let trips = list_trips(&db, &jo).unwrap();
        assert_eq!(1, trips.len());
        assert_eq!(trip.id, trips[0].id);
    }
}
