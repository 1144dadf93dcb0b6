use super::prelude::*;

/// Users may delete their own account, nobody else's.
pub fn delete_user<D>(db: &D, login_email: &EmailAddress, email: &EmailAddress) -> Result<()>
where
    D: UserRepo + IdentityRepo,
{
    if login_email != email {
        return Err(Error::Forbidden);
    }
    db.delete_identities_by_email(email)?;
    Ok(db.delete_user_by_email(email)?)
}

/// Admins may delete any account below their own role.
pub fn delete_user_by_admin<D>(
    db: &D,
    admin_email: &EmailAddress,
    email: &EmailAddress,
) -> Result<()>
where
    D: UserRepo + IdentityRepo,
{
    let admin = db
        .try_get_user_by_email(admin_email)?
        .ok_or(Error::UserDoesNotExist)?;
    let user = db.try_get_user_by_email(email)?.ok_or(Error::UserDoesNotExist)?;
    if admin.role <= user.role {
        return Err(Error::Forbidden);
    }
    log::info!("Deleting user {}", email);
    db.delete_identities_by_email(email)?;
    Ok(db.delete_user_by_email(email)?)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    fn user(email: &str, role: Role) -> User {
        User {
            email: email.parse().unwrap(),
            email_confirmed: true,
            password: "secret".parse::<Password>().unwrap(),
            display_name: None,
            role,
            banned_at: None,
        }
    }

    #[test]
    fn delete_own_account() {
        let db = MockDb::default();
        db.users.borrow_mut().push(user("jo@test.org", Role::User));
        let jo = "jo@test.org".parse().unwrap();
        assert!(delete_user(&db, &jo, &jo).is_ok());
        assert!(db.users.borrow().is_empty());
    }

    #[test]
    fn delete_somebody_elses_account() {
        let db = MockDb::default();
        db.users.borrow_mut().push(user("jo@test.org", Role::User));
        let jo = "jo@test.org".parse().unwrap();
        let other = "other@test.org".parse().unwrap();
        assert!(matches!(
            delete_user(&db, &other, &jo),
            Err(Error::Forbidden)
        ));
    }

    #[test]
    fn admin_deletes_a_user_with_identities() {
        let db = MockDb::default();
        db.users.borrow_mut().push(user("admin@test.org", Role::Admin));
        db.users.borrow_mut().push(user("jo@test.org", Role::User));
        db.identities.borrow_mut().push(ExternalIdentity {
            email: "jo@test.org".parse().unwrap(),
            provider: OAuthProvider::Google,
            external_id: "g-1".into(),
            linked_at: Timestamp::now(),
        });
        let admin = "admin@test.org".parse().unwrap();
        let jo = "jo@test.org".parse().unwrap();
        assert!(delete_user_by_admin(&db, &admin, &jo).is_ok());
        assert_eq!(1, db.users.borrow().len());
        assert!(db.identities.borrow().is_empty());
    }
}
