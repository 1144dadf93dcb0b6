use tw_core::gateways::notify::NotificationGateway;

use super::*;

pub fn add_trip_place(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    account: &EmailAddress,
    trip_id: &Id,
    new_trip_place: usecases::NewTripPlace,
) -> Result<TripPlace> {
    let trip_place = connections.exclusive()?.transaction(|conn| {
        let trip_place =
            usecases::add_trip_place(conn, account, trip_id, new_trip_place).map_err(|err| {
                warn!("Failed to attach a place to trip {}: {}", trip_id, err);
                err
            })?;
        usecases::record_activity(
            conn,
            AuditLogEntry::new(Activity::now(Some(account.clone())), "trip.place.add")
                .context(trip_id.as_str())
                .comment(trip_place.place.as_str()),
        )?;
        Ok::<_, usecases::Error>(trip_place)
    })?;

    // Proposals are announced to the rest of the group after the
    // transaction has been committed.
    if trip_place.status == TripPlaceStatus::Proposed {
        if let Err(err) = notify_place_proposed(connections, notify, account, &trip_place) {
            error!(
                "Failed to send notifications for place {} proposed for trip {}: {}",
                trip_place.place, trip_id, err
            );
        }
    }

    Ok(trip_place)
}

fn notify_place_proposed(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    proposer: &EmailAddress,
    trip_place: &TripPlace,
) -> Result<()> {
    let db = connections.shared()?;
    let trip = db.get_trip(trip_place.trip.as_str())?;
    let place = db.get_place(trip_place.place.as_str())?;
    let mut recipients: Vec<_> = db
        .memberships_of_trip(&trip.id)?
        .into_iter()
        .filter(|m| m.is_accepted())
        .map(|m| m.member)
        .collect();
    recipients.push(trip.owner.clone());
    recipients.retain(|addr| addr != proposer);
    drop(db);
    notify.place_proposed(&trip, &place, &recipients);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    fn add_trip_place(
        fixture: &BackendFixture,
        account: &EmailAddress,
        trip_id: &Id,
        new_trip_place: usecases::NewTripPlace,
    ) -> super::Result<TripPlace> {
        super::add_trip_place(
            &fixture.db_connections,
            &fixture.notify,
            account,
            trip_id,
            new_trip_place,
        )
    }

    #[test]
    fn owner_should_attach_a_place_as_accepted() {
        let fixture = BackendFixture::new();
        let owner = fixture.create_user_with_email("owner@bar.tld");
        let trip = fixture.create_trip(&owner, "City break");
        let place = fixture.create_place(&owner, "Museum of Modern Art");

        let new_trip_place = usecases::NewTripPlace {
            place: place.id.clone(),
            day: Some(1),
            is_fixed: true,
            note: None,
        };
        let trip_place = add_trip_place(&fixture, &owner, &trip.id, new_trip_place).unwrap();
        assert_eq!(TripPlaceStatus::Accepted, trip_place.status);
        assert!(trip_place.is_fixed);

        let db = fixture.db_connections.shared().unwrap();
        assert!(db.try_get_trip_place(&trip.id, &place.id).unwrap().is_some());
    }

    #[test]
    fn member_should_only_propose() {
        let fixture = BackendFixture::new();
        let owner = fixture.create_user_with_email("owner@bar.tld");
        let member = fixture.create_user_with_email("friend@bar.tld");
        let trip = fixture.create_trip(&owner, "City break");
        fixture.invite_and_accept(&owner, &trip.id, &member);
        let place = fixture.create_place(&owner, "Harbor tour");

        let new_trip_place = usecases::NewTripPlace {
            place: place.id.clone(),
            day: None,
            is_fixed: false,
            note: Some("Looks fun".into()),
        };
        let trip_place = add_trip_place(&fixture, &member, &trip.id, new_trip_place).unwrap();
        assert_eq!(TripPlaceStatus::Proposed, trip_place.status);

        // Scheduling is reserved for the owner.
        let another = fixture.create_place(&owner, "Aquarium");
        let scheduled = usecases::NewTripPlace {
            place: another.id.clone(),
            day: Some(2),
            is_fixed: false,
            note: None,
        };
        assert!(add_trip_place(&fixture, &member, &trip.id, scheduled).is_err());
    }
}
