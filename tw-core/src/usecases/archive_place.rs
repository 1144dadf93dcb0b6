use super::prelude::*;
use crate::usecases;

/// Takes a place out of the catalog without deleting it.
///
/// Archived places disappear from search and recommendations but
/// stay resolvable by id, so existing trip attachments keep working.
pub fn archive_place<D>(db: &D, account: &EmailAddress, place_id: &Id) -> Result<()>
where
    D: UserRepo + PlaceRepo,
{
    usecases::authorize_user_by_email(db, account, Role::Admin)?;
    let mut place = db.get_place(place_id.as_str())?;
    if place.is_archived() {
        return Ok(());
    }
    place.archived_at = Some(Timestamp::now());
    db.update_place(&place)?;
    log::info!("Archived place {} ({})", place.id, place.title);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use crate::entities::builders::*;

    #[test]
    fn archive_is_admin_only_and_idempotent() {
        let db = MockDb::default();
        let admin: EmailAddress = "admin@test.org".parse().unwrap();
        let jo: EmailAddress = "jo@test.org".parse().unwrap();
        db.users.borrow_mut().push(
            User::build()
                .email(admin.as_str())
                .role(Role::Admin)
                .finish(),
        );
        db.users
            .borrow_mut()
            .push(User::build().email(jo.as_str()).finish());
        let place = Place::build().title("Old pier").finish();
        let id = place.id.clone();
        db.places.borrow_mut().push(place);
        assert!(matches!(
            archive_place(&db, &jo, &id),
            Err(Error::Forbidden)
        ));
        archive_place(&db, &admin, &id).unwrap();
        let archived_at = db.places.borrow()[0].archived_at;
        assert!(archived_at.is_some());
        archive_place(&db, &admin, &id).unwrap();
        assert_eq!(archived_at, db.places.borrow()[0].archived_at);
    }
}
