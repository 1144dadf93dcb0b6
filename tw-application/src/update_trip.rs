use super::*;

pub fn update_trip(
    connections: &sqlite::Connections,
    owner: &EmailAddress,
    trip_id: &Id,
    update: usecases::UpdateTrip,
) -> Result<Trip> {
    Ok(connections.exclusive()?.transaction(|conn| {
        let trip = usecases::update_trip(conn, owner, trip_id, update).map_err(|err| {
            warn!("Failed to update trip {}: {}", trip_id, err);
            err
        })?;
        usecases::record_activity(
            conn,
            AuditLogEntry::new(Activity::now(Some(owner.clone())), "trip.update")
                .context(trip_id.as_str()),
        )?;
        Ok::<_, usecases::Error>(trip)
    })?)
}
