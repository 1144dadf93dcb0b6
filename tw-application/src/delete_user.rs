use super::*;

pub fn delete_user(
    connections: &sqlite::Connections,
    login_email: &EmailAddress,
    email: &EmailAddress,
) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::delete_user(conn, login_email, email).map_err(|err| {
            warn!("Failed to delete the account of {}: {}", email, err);
            err
        })?;
        usecases::record_activity(
            conn,
            AuditLogEntry::new(Activity::now(Some(login_email.clone())), "user.delete")
                .context(email.as_str()),
        )?;
        Ok::<_, usecases::Error>(())
    })?)
}

pub fn delete_user_by_admin(
    connections: &sqlite::Connections,
    admin_email: &EmailAddress,
    email: &EmailAddress,
) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::delete_user_by_admin(conn, admin_email, email).map_err(|err| {
            warn!("Failed to delete the account of {}: {}", email, err);
            err
        })?;
        usecases::record_activity(
            conn,
            AuditLogEntry::new(Activity::now(Some(admin_email.clone())), "user.delete")
                .context(email.as_str()),
        )?;
        Ok::<_, usecases::Error>(())
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn deleting_an_account_should_keep_the_audit_trail() {
        let fixture = BackendFixture::new();
        let user = fixture.create_user_with_email("user@bar.tld");

        super::delete_user(&fixture.db_connections, &user, &user).unwrap();
        assert!(fixture.try_get_user(&user).is_none());

        // The recorded trail outlives the account it refers to.
        let db = fixture.db_connections.shared().unwrap();
        let entries = db
            .audit_log_entries(&AuditLogQuery::default(), &Pagination::default())
            .unwrap();
        assert_eq!(1, entries.len());
        assert_eq!("user.delete", entries[0].action);
        assert_eq!(Some(user), entries[0].activity.by.clone());
    }

    #[test]
    fn nobody_should_delete_somebody_elses_account() {
        let fixture = BackendFixture::new();
        let user = fixture.create_user_with_email("user@bar.tld");
        let other = fixture.create_user_with_email("other@bar.tld");

        assert!(super::delete_user(&fixture.db_connections, &user, &other).is_err());
        assert!(fixture.try_get_user(&other).is_some());
    }

    #[test]
    fn admin_should_delete_a_user_account() {
        let fixture = BackendFixture::new();
        let admin = fixture.create_admin("admin@bar.tld");
        let user = fixture.create_user_with_email("user@bar.tld");

        super::delete_user_by_admin(&fixture.db_connections, &admin, &user).unwrap();
        assert!(fixture.try_get_user(&user).is_none());
    }
}
