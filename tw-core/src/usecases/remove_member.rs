use super::prelude::*;
use crate::usecases;

/// Removes a member from the trip.
///
/// The owner removes anyone, a member only themselves (leaving the
/// trip). The owner's own row cannot be removed.
pub fn remove_member<D>(
    db: &D,
    account: &EmailAddress,
    trip_id: &Id,
    member: &EmailAddress,
) -> Result<()>
where
    D: TripRepo + MembershipRepo,
{
    let trip = if account == member {
        usecases::authorize_trip_read(db, account, trip_id)?
    } else {
        usecases::authorize_trip_owner(db, account, trip_id)?
    };
    if member == &trip.owner {
        return Err(Error::OwnerImmutable);
    }
    db.delete_membership(trip_id, member)?;
    log::info!("Removed {} from trip {}", member, trip_id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use time::macros::date;

    fn fixture(db: &MockDb) -> (EmailAddress, EmailAddress, Trip) {
        let owner: EmailAddress = "owner@test.org".parse().unwrap();
        let jo: EmailAddress = "jo@test.org".parse().unwrap();
        for email in [&owner, &jo] {
            db.users.borrow_mut().push(User {
                email: email.clone(),
                email_confirmed: true,
                password: "secret".parse::<Password>().unwrap(),
                display_name: None,
                role: Role::User,
                banned_at: None,
            });
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
        (owner, jo, trip)
    }

    #[test]
    fn owner_removes_a_member() {
        let db = MockDb::default();
        let (owner, jo, trip) = fixture(&db);
        remove_member(&db, &owner, &trip.id, &jo).unwrap();
        assert_eq!(1, db.memberships.borrow().len());
    }

    #[test]
    fn member_leaves_the_trip() {
        let db = MockDb::default();
        let (_, jo, trip) = fixture(&db);
        remove_member(&db, &jo, &trip.id, &jo).unwrap();
        assert_eq!(1, db.memberships.borrow().len());
    }

    #[test]
    fn member_removes_another_member() {
        let db = MockDb::default();
        let (owner, jo, trip) = fixture(&db);
        usecases::respond_to_invitation(&db, &jo, &trip.id, true).unwrap();
        assert!(matches!(
            remove_member(&db, &jo, &trip.id, &owner),
            Err(Error::Forbidden)
        ));
    }

    #[test]
    fn owner_cannot_be_removed() {
        let db = MockDb::default();
        let (owner, _, trip) = fixture(&db);
        assert!(matches!(
            remove_member(&db, &owner, &trip.id, &owner),
            Err(Error::OwnerImmutable)
        ));
    }
}
