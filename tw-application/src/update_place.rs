use super::*;

pub fn update_place(
    connections: &sqlite::Connections,
    account: &EmailAddress,
    place_id: &Id,
    update: usecases::UpdatePlace,
) -> Result<Place> {
    Ok(connections.exclusive()?.transaction(|conn| {
        let place =
            usecases::update_place(conn, account, place_id, update).map_err(|err| {
                warn!("Failed to update place {}: {}", place_id, err);
                err
            })?;
        usecases::record_activity(
            conn,
            AuditLogEntry::new(Activity::now(Some(account.clone())), "place.update")
                .context(place.id.as_str()),
        )?;
        Ok::<_, usecases::Error>(place)
    })?)
}
