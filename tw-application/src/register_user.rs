use tw_core::gateways::notify::NotificationGateway;

use super::*;

pub fn register_user(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    email: &EmailAddress,
    password: &str,
) -> Result<()> {
    let user = connections.exclusive()?.transaction(|conn| {
        let credentials = usecases::Credentials { email, password };
        usecases::register_with_email(conn, &credentials).map_err(|err| {
            warn!("Failed to register {}: {}", email, err);
            err
        })?;
        let user = conn.get_user_by_email(email)?;
        usecases::record_activity(
            conn,
            AuditLogEntry::new(Activity::now(Some(email.clone())), "user.register"),
        )?;
        Ok::<_, usecases::Error>(user)
    })?;

    // The confirmation e-mail goes out after the commit. The token
    // is self-contained, confirming decodes it back into the
    // address.
    let token = EmailNonce {
        email: user.email.clone(),
        nonce: Nonce::new(),
    }
    .encode_to_string();
    notify.user_registered(&user, &token);
    Ok(())
}

pub fn confirm_email_address(connections: &sqlite::Connections, token: &str) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        let email_nonce =
            EmailNonce::decode_from_str(token).map_err(|_| usecases::Error::TokenInvalid)?;
        usecases::confirm_email_address(conn, token).map_err(|err| {
            warn!("Failed to confirm the email address of {}: {}", email_nonce.email, err);
            err
        })?;
        usecases::record_activity(
            conn,
            AuditLogEntry::new(Activity::now(Some(email_nonce.email)), "user.confirm_email"),
        )?;
        Ok::<_, usecases::Error>(())
    })?)
}
