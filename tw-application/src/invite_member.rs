use tw_core::gateways::notify::NotificationGateway;

use super::*;

pub fn invite_member(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    owner: &EmailAddress,
    trip_id: &Id,
    invitee: &EmailAddress,
) -> Result<TripMembership> {
    let membership = connections.exclusive()?.transaction(|conn| {
        let membership = usecases::invite_member(conn, owner, trip_id, invitee).map_err(|err| {
            warn!("Failed to invite {} to trip {}: {}", invitee, trip_id, err);
            err
        })?;
        usecases::record_activity(
            conn,
            AuditLogEntry::new(Activity::now(Some(owner.clone())), "trip.member.invite")
                .context(trip_id.as_str())
                .comment(invitee.as_str()),
        )?;
        Ok::<_, usecases::Error>(membership)
    })?;

    // The invitation e-mail only goes out after the transaction
    // has been committed.
    match connections.shared()?.get_trip(trip_id.as_str()) {
        Ok(trip) => notify.member_invited(&trip, invitee),
        Err(err) => error!("Failed to load trip {} for the invitation e-mail: {}", trip_id, err),
    }

    Ok(membership)
}
