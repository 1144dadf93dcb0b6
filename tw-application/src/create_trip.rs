use super::*;

pub fn create_trip(
    connections: &sqlite::Connections,
    owner: EmailAddress,
    new_trip: usecases::NewTrip,
) -> Result<Trip> {
    Ok(connections.exclusive()?.transaction(|conn| {
        let activity = Activity::now(Some(owner.clone()));
        let trip = usecases::create_trip(conn, owner, new_trip).map_err(|err| {
            warn!("Failed to create trip: {}", err);
            err
        })?;
        usecases::record_activity(
            conn,
            AuditLogEntry::new(activity, "trip.create").context(trip.id.as_str()),
        )?;
        Ok::<_, usecases::Error>(trip)
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn should_create_a_trip_and_record_the_activity() {
        let fixture = BackendFixture::new();
        let owner = fixture.create_user_with_email("owner@bar.tld");

        let trip = super::create_trip(
            &fixture.db_connections,
            owner.clone(),
            default_new_trip("Road trip"),
        )
        .unwrap();
        assert_eq!(owner, trip.owner);

        let db = fixture.db_connections.shared().unwrap();
        assert_eq!(trip, db.get_trip(trip.id.as_str()).unwrap());
        let entries = db
            .audit_log_entries(&AuditLogQuery::default(), &Pagination::default())
            .unwrap();
        assert_eq!(1, entries.len());
        assert_eq!("trip.create", entries[0].action);
        assert_eq!(Some(trip.id.to_string()), entries[0].context);
    }

    #[test]
    fn should_reject_a_trip_that_ends_before_it_starts() {
        let fixture = BackendFixture::new();
        let owner = fixture.create_user_with_email("owner@bar.tld");

        let mut new_trip = default_new_trip("Backwards");
        std::mem::swap(&mut new_trip.starts_on, &mut new_trip.ends_on);
        assert!(super::create_trip(&fixture.db_connections, owner, new_trip).is_err());

        // Nothing must have been committed.
        let db = fixture.db_connections.shared().unwrap();
        assert_eq!(0, db.count_trips().unwrap());
        assert_eq!(0, db.count_audit_log_entries().unwrap());
    }
}
