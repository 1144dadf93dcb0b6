use super::*;

pub fn remove_trip_place(
    connections: &sqlite::Connections,
    account: &EmailAddress,
    trip_id: &Id,
    place_id: &Id,
) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::remove_trip_place(conn, account, trip_id, place_id).map_err(|err| {
            warn!("Failed to detach place {} from trip {}: {}", place_id, trip_id, err);
            err
        })?;
        usecases::record_activity(
            conn,
            AuditLogEntry::new(Activity::now(Some(account.clone())), "trip.place.remove")
                .context(trip_id.as_str())
                .comment(place_id.as_str()),
        )?;
        Ok::<_, usecases::Error>(())
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn should_drop_the_votes_together_with_the_place() {
        let fixture = BackendFixture::new();
        let owner = fixture.create_user_with_email("owner@bar.tld");
        let member = fixture.create_user_with_email("friend@bar.tld");
        let trip = fixture.create_trip(&owner, "City break");
        fixture.invite_and_accept(&owner, &trip.id, &member);
        let place = fixture.create_place(&owner, "Harbor tour");
        fixture.attach_place(&owner, &trip.id, &place.id);
        fixture.cast_vote(&member, &trip.id, &place.id, 4);

        super::remove_trip_place(&fixture.db_connections, &owner, &trip.id, &place.id).unwrap();

        let db = fixture.db_connections.shared().unwrap();
        assert!(db.try_get_trip_place(&trip.id, &place.id).unwrap().is_none());
        assert!(db.votes_of_trip(&trip.id).unwrap().is_empty());
    }
}
