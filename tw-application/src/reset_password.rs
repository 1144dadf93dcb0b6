use tw_core::gateways::notify::NotificationGateway;

use super::*;

fn refresh_user_token(connections: &sqlite::Connections, user: &User) -> Result<EmailNonce> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::refresh_user_token(conn, user.email.to_owned()))?)
}

pub fn reset_password_request(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    email: &EmailAddress,
) -> Result<EmailNonce> {
    // The user is loaded before the following transaction that
    // requires exclusive access to the database connection for
    // writing.
    let user = connections.shared()?.get_user_by_email(email)?;
    let email_nonce = refresh_user_token(connections, &user)?;
    notify.user_reset_password_requested(&email_nonce);
    Ok(email_nonce)
}

pub fn reset_password_with_email_nonce(
    connections: &sqlite::Connections,
    email_nonce: EmailNonce,
    new_password: Password,
) -> Result<()> {
    // The token should be consumed only once, even if the
    // following transaction for updating the user fails!
    let token = connections.exclusive()?.transaction(|conn| {
        usecases::consume_user_token(conn, &email_nonce).map_err(|err| {
            warn!(
                "Missing or invalid token to reset password for user '{}': {}",
                email_nonce.email, err
            );
            err
        })
    })?;

    // The consumed nonce must match the request parameters
    debug_assert!(token.email_nonce == email_nonce);

    // Verify and update the user entity
    connections.exclusive()?.transaction(|conn| {
        usecases::confirm_email_and_reset_password(conn, &token.email_nonce.email, new_password)
            .map_err(|err| {
                warn!(
                    "Failed to verify e-mail ({}) and reset password: {}",
                    token.email_nonce.email, err
                );
                err
            })?;
        usecases::record_activity(
            conn,
            AuditLogEntry::new(
                Activity::now(Some(token.email_nonce.email.clone())),
                "user.reset_password",
            ),
        )?;
        Ok::<_, usecases::Error>(())
    })?;
    Ok(())
}
