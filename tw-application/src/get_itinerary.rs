use time::Duration;

use super::*;

/// How long a cached itinerary is served before it is built anew.
pub const DEFAULT_ITINERARY_TTL: Duration = Duration::hours(6);

/// Returns the itinerary of the trip, generating it on demand.
///
/// The cached schedule is reused as long as it is younger than
/// `ttl`. There is no other invalidation: changes to the trip's
/// places only show up once the cache has expired.
pub fn get_itinerary(
    connections: &sqlite::Connections,
    account: &EmailAddress,
    trip_id: &Id,
    ttl: Duration,
) -> Result<TripItinerary> {
    // Fast path without the exclusive lock.
    {
        let db = connections.shared()?;
        usecases::authorize_trip_read(&db, account, trip_id)?;
        if let Some(itinerary) = db.try_get_itinerary(trip_id)? {
            if itinerary.is_fresh(Timestamp::now(), ttl) {
                debug!("Serving the cached itinerary of trip {}", trip_id);
                return Ok(itinerary);
            }
        }
    }

    Ok(connections.exclusive()?.transaction(|conn| {
        let itinerary = usecases::generate_itinerary(conn, account, trip_id).map_err(|err| {
            warn!("Failed to generate the itinerary of trip {}: {}", trip_id, err);
            err
        })?;
        conn.save_itinerary(&itinerary)?;
        usecases::record_activity(
            conn,
            AuditLogEntry::new(Activity::now(Some(account.clone())), "trip.itinerary.refresh")
                .context(trip_id.as_str()),
        )?;
        Ok::<_, usecases::Error>(itinerary)
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;
    use time::Duration;

    fn get_itinerary(
        fixture: &BackendFixture,
        account: &EmailAddress,
        trip_id: &Id,
        ttl: Duration,
    ) -> super::Result<TripItinerary> {
        super::get_itinerary(&fixture.db_connections, account, trip_id, ttl)
    }

    #[test]
    fn should_cache_the_generated_itinerary() {
        let fixture = BackendFixture::new();
        let owner = fixture.create_user_with_email("owner@bar.tld");
        let trip = fixture.create_trip(&owner, "City break");
        let place = fixture.create_place(&owner, "Harbor tour");
        fixture.attach_place(&owner, &trip.id, &place.id);

        let ttl = super::DEFAULT_ITINERARY_TTL;
        let first = get_itinerary(&fixture, &owner, &trip.id, ttl).unwrap();
        assert_eq!(trip.duration_days() as usize, first.days.len());
        assert_eq!(1, first.item_count());

        // Attaching another place does not show up while the cached
        // schedule is still fresh.
        let second_place = fixture.create_place(&owner, "Aquarium");
        fixture.attach_place(&owner, &trip.id, &second_place.id);
        let cached = get_itinerary(&fixture, &owner, &trip.id, ttl).unwrap();
        assert_eq!(first, cached);

        // A zero TTL forces the rebuild.
        let rebuilt = get_itinerary(&fixture, &owner, &trip.id, Duration::ZERO).unwrap();
        assert_eq!(2, rebuilt.item_count());
    }

    #[test]
    fn members_should_see_the_itinerary_but_strangers_should_not() {
        let fixture = BackendFixture::new();
        let owner = fixture.create_user_with_email("owner@bar.tld");
        let member = fixture.create_user_with_email("friend@bar.tld");
        let stranger = fixture.create_user_with_email("stranger@bar.tld");
        let trip = fixture.create_trip(&owner, "City break");
        fixture.invite_and_accept(&owner, &trip.id, &member);

        let ttl = super::DEFAULT_ITINERARY_TTL;
        assert!(get_itinerary(&fixture, &member, &trip.id, ttl).is_ok());
        assert!(get_itinerary(&fixture, &stranger, &trip.id, ttl).is_err());
    }
}
