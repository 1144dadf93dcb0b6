use super::*;

pub fn remove_member(
    connections: &sqlite::Connections,
    account: &EmailAddress,
    trip_id: &Id,
    member: &EmailAddress,
) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::remove_member(conn, account, trip_id, member).map_err(|err| {
            warn!("Failed to remove {} from trip {}: {}", member, trip_id, err);
            err
        })?;
        usecases::record_activity(
            conn,
            AuditLogEntry::new(Activity::now(Some(account.clone())), "trip.member.remove")
                .context(trip_id.as_str())
                .comment(member.as_str()),
        )?;
        Ok::<_, usecases::Error>(())
    })?)
}
