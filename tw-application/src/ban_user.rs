use super::*;

pub fn ban_user(
    connections: &sqlite::Connections,
    admin_email: &EmailAddress,
    user_email: &EmailAddress,
) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::ban_user(conn, admin_email, user_email).map_err(|err| {
            warn!("Failed to ban {}: {}", user_email, err);
            err
        })?;
        usecases::record_activity(
            conn,
            AuditLogEntry::new(Activity::now(Some(admin_email.clone())), "user.ban")
                .context(user_email.as_str()),
        )?;
        Ok::<_, usecases::Error>(())
    })?)
}

pub fn unban_user(
    connections: &sqlite::Connections,
    admin_email: &EmailAddress,
    user_email: &EmailAddress,
) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::unban_user(conn, admin_email, user_email).map_err(|err| {
            warn!("Failed to unban {}: {}", user_email, err);
            err
        })?;
        usecases::record_activity(
            conn,
            AuditLogEntry::new(Activity::now(Some(admin_email.clone())), "user.unban")
                .context(user_email.as_str()),
        )?;
        Ok::<_, usecases::Error>(())
    })?)
}
