use super::*;

pub fn update_trip_place(
    connections: &sqlite::Connections,
    account: &EmailAddress,
    trip_id: &Id,
    place_id: &Id,
    update: usecases::UpdateTripPlace,
) -> Result<TripPlace> {
    Ok(connections.exclusive()?.transaction(|conn| {
        let trip_place = usecases::update_trip_place(conn, account, trip_id, place_id, update)
            .map_err(|err| {
                warn!("Failed to update place {} of trip {}: {}", place_id, trip_id, err);
                err
            })?;
        usecases::record_activity(
            conn,
            AuditLogEntry::new(Activity::now(Some(account.clone())), "trip.place.update")
                .context(trip_id.as_str())
                .comment(place_id.as_str()),
        )?;
        Ok::<_, usecases::Error>(trip_place)
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn owner_should_accept_a_proposed_place() {
        let fixture = BackendFixture::new();
        let owner = fixture.create_user_with_email("owner@bar.tld");
        let member = fixture.create_user_with_email("friend@bar.tld");
        let trip = fixture.create_trip(&owner, "City break");
        fixture.invite_and_accept(&owner, &trip.id, &member);
        let place = fixture.create_place(&owner, "Harbor tour");
        fixture.propose_place(&member, &trip.id, &place.id);

        let update = usecases::UpdateTripPlace {
            status: TripPlaceStatus::Accepted,
            is_fixed: false,
            day: Some(1),
            order_index: Some(1),
            note: None,
        };
        let updated =
            super::update_trip_place(&fixture.db_connections, &owner, &trip.id, &place.id, update)
                .unwrap();
        assert_eq!(TripPlaceStatus::Accepted, updated.status);
        assert_eq!(Some(1), updated.day);
    }

    #[test]
    fn member_should_not_touch_the_schedule() {
        let fixture = BackendFixture::new();
        let owner = fixture.create_user_with_email("owner@bar.tld");
        let member = fixture.create_user_with_email("friend@bar.tld");
        let trip = fixture.create_trip(&owner, "City break");
        fixture.invite_and_accept(&owner, &trip.id, &member);
        let place = fixture.create_place(&owner, "Harbor tour");
        fixture.propose_place(&member, &trip.id, &place.id);

        let update = usecases::UpdateTripPlace {
            status: TripPlaceStatus::Accepted,
            is_fixed: false,
            day: None,
            order_index: None,
            note: None,
        };
        assert!(super::update_trip_place(
            &fixture.db_connections,
            &member,
            &trip.id,
            &place.id,
            update
        )
        .is_err());
    }
}
