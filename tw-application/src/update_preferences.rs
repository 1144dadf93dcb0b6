use super::*;

pub fn update_preferences(
    connections: &sqlite::Connections,
    account: &EmailAddress,
    prefs: Vec<usecases::NewPreference>,
) -> Result<Vec<UserPreference>> {
    Ok(connections.exclusive()?.transaction(|conn| {
        let stored = usecases::update_preferences(conn, account, prefs).map_err(|err| {
            warn!("Failed to update the preferences of {}: {}", account, err);
            err
        })?;
        usecases::record_activity(
            conn,
            AuditLogEntry::new(Activity::now(Some(account.clone())), "user.preferences"),
        )?;
        Ok::<_, usecases::Error>(stored)
    })?)
}
