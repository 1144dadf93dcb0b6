use super::*;

pub fn create_place(
    connections: &sqlite::Connections,
    account: &EmailAddress,
    new_place: usecases::NewPlace,
) -> Result<Place> {
    Ok(connections.exclusive()?.transaction(|conn| {
        let place = usecases::create_place(conn, account, new_place).map_err(|err| {
            warn!("Failed to create place: {}", err);
            err
        })?;
        usecases::record_activity(
            conn,
            AuditLogEntry::new(Activity::now(Some(account.clone())), "place.create")
                .context(place.id.as_str()),
        )?;
        Ok::<_, usecases::Error>(place)
    })?)
}
