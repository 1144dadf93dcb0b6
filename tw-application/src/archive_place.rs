use super::*;

pub fn archive_place(
    connections: &sqlite::Connections,
    account: &EmailAddress,
    place_id: &Id,
) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::archive_place(conn, account, place_id).map_err(|err| {
            warn!("Failed to archive place {}: {}", place_id, err);
            err
        })?;
        usecases::record_activity(
            conn,
            AuditLogEntry::new(Activity::now(Some(account.clone())), "place.archive")
                .context(place_id.as_str()),
        )?;
        Ok::<_, usecases::Error>(())
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    fn archive_place(
        fixture: &BackendFixture,
        account: &EmailAddress,
        place_id: &Id,
    ) -> super::Result<()> {
        super::archive_place(&fixture.db_connections, account, place_id)
    }

    #[test]
    fn archived_places_should_leave_the_catalog_but_stay_resolvable() {
        let fixture = BackendFixture::new();
        let contributor = fixture.create_user_with_email("jo@bar.tld");
        let admin = fixture.create_admin("admin@bar.tld");
        let trip = fixture.create_trip(&contributor, "City break");
        let place = fixture.create_place(&contributor, "Old pier");
        fixture.attach_place(&contributor, &trip.id, &place.id);

        archive_place(&fixture, &admin, &place.id).unwrap();

        let db = fixture.db_connections.shared().unwrap();
        let archived = db.get_place(place.id.as_str()).unwrap();
        assert!(archived.is_archived());
        // The attachment survives for trips that already use the place.
        assert!(db.try_get_trip_place(&trip.id, &place.id).unwrap().is_some());
    }

    #[test]
    fn only_admins_should_archive() {
        let fixture = BackendFixture::new();
        let contributor = fixture.create_user_with_email("jo@bar.tld");
        let place = fixture.create_place(&contributor, "Old pier");

        assert!(matches!(
            archive_place(&fixture, &contributor, &place.id),
            Err(AppError::Business(BError::Parameter(usecases::Error::Forbidden)))
        ));
    }
}
