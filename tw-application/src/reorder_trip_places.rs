use super::*;

pub fn reorder_trip_places(
    connections: &sqlite::Connections,
    owner: &EmailAddress,
    trip_id: &Id,
    slots: &[TripPlaceSlot],
) -> Result<usize> {
    Ok(connections.exclusive()?.transaction(|conn| {
        let updated = usecases::reorder_trip_places(conn, owner, trip_id, slots).map_err(|err| {
            warn!("Failed to reorder the places of trip {}: {}", trip_id, err);
            err
        })?;
        usecases::record_activity(
            conn,
            AuditLogEntry::new(Activity::now(Some(owner.clone())), "trip.place.reorder")
                .context(trip_id.as_str()),
        )?;
        Ok::<_, usecases::Error>(updated)
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn should_roll_back_when_a_slot_is_unknown() {
        let fixture = BackendFixture::new();
        let owner = fixture.create_user_with_email("owner@bar.tld");
        let trip = fixture.create_trip(&owner, "City break");
        let place = fixture.create_place(&owner, "Harbor tour");
        fixture.attach_place(&owner, &trip.id, &place.id);

        let slots = vec![
            TripPlaceSlot {
                place: place.id.clone(),
                day: Some(2),
                order_index: Some(1),
            },
            TripPlaceSlot {
                place: Id::new(),
                day: Some(1),
                order_index: Some(1),
            },
        ];
        assert!(
            super::reorder_trip_places(&fixture.db_connections, &owner, &trip.id, &slots).is_err()
        );

        // The attached place must keep its previous slot.
        let db = fixture.db_connections.shared().unwrap();
        let trip_place = db.get_trip_place(&trip.id, &place.id).unwrap();
        assert_eq!(None, trip_place.day);
    }

    #[test]
    fn should_apply_all_slots() {
        let fixture = BackendFixture::new();
        let owner = fixture.create_user_with_email("owner@bar.tld");
        let trip = fixture.create_trip(&owner, "City break");
        let first = fixture.create_place(&owner, "Harbor tour");
        let second = fixture.create_place(&owner, "Aquarium");
        fixture.attach_place(&owner, &trip.id, &first.id);
        fixture.attach_place(&owner, &trip.id, &second.id);

        let slots = vec![
            TripPlaceSlot {
                place: first.id.clone(),
                day: Some(1),
                order_index: Some(2),
            },
            TripPlaceSlot {
                place: second.id.clone(),
                day: Some(1),
                order_index: Some(1),
            },
        ];
        let updated =
            super::reorder_trip_places(&fixture.db_connections, &owner, &trip.id, &slots).unwrap();
        assert_eq!(2, updated);

        let db = fixture.db_connections.shared().unwrap();
        assert_eq!(Some(2), db.get_trip_place(&trip.id, &first.id).unwrap().order_index);
        assert_eq!(Some(1), db.get_trip_place(&trip.id, &second.id).unwrap().order_index);
    }
}
