use super::*;

pub fn archive_trip(
    connections: &sqlite::Connections,
    owner: &EmailAddress,
    trip_id: &Id,
) -> Result<Trip> {
    Ok(connections.exclusive()?.transaction(|conn| {
        let trip = usecases::archive_trip(conn, owner, trip_id).map_err(|err| {
            warn!("Failed to archive trip {}: {}", trip_id, err);
            err
        })?;
        usecases::record_activity(
            conn,
            AuditLogEntry::new(Activity::now(Some(owner.clone())), "trip.archive")
                .context(trip_id.as_str()),
        )?;
        Ok::<_, usecases::Error>(trip)
    })?)
}
