use super::prelude::*;

pub fn change_user_role<D: Db>(
    db: &D,
    account_email: &EmailAddress,
    user_email: &EmailAddress,
    role: Role,
) -> Result<()> {
    log::info!("Changing role to {:?} for {}", role, user_email);
    let account = db
        .try_get_user_by_email(account_email)?
        .ok_or(Error::UserDoesNotExist)?;
    let mut user = db
        .try_get_user_by_email(user_email)?
        .ok_or(Error::UserDoesNotExist)?;
    // Nobody may raise anybody, including themself, to their own
    // level or above.
    if account.role > user.role && role < account.role {
        user.role = role;
        db.update_user(&user)?;
        Ok(())
    } else {
        Err(Error::Forbidden)
    }
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
    fn admin_demotes_and_promotes_users() {
        let db = MockDb::default();
        db.users.borrow_mut().push(user("admin@test.org", Role::Admin));
        db.users.borrow_mut().push(user("jo@test.org", Role::User));
        let admin = "admin@test.org".parse().unwrap();
        let jo = "jo@test.org".parse().unwrap();
        assert!(change_user_role(&db, &admin, &jo, Role::Guest).is_ok());
        assert_eq!(Role::Guest, db.users.borrow()[1].role);
        assert!(change_user_role(&db, &admin, &jo, Role::User).is_ok());
        assert_eq!(Role::User, db.users.borrow()[1].role);
    }

    #[test]
    fn users_cannot_promote_each_other() {
        let db = MockDb::default();
        db.users.borrow_mut().push(user("a@test.org", Role::User));
        db.users.borrow_mut().push(user("b@test.org", Role::User));
        let a = "a@test.org".parse().unwrap();
        let b = "b@test.org".parse().unwrap();
        assert!(matches!(
            change_user_role(&db, &a, &b, Role::Admin),
            Err(Error::Forbidden)
        ));
    }

    #[test]
    fn admins_cannot_promote_to_admin() {
        let db = MockDb::default();
        db.users.borrow_mut().push(user("admin@test.org", Role::Admin));
        db.users.borrow_mut().push(user("jo@test.org", Role::User));
        let admin = "admin@test.org".parse().unwrap();
        let jo = "jo@test.org".parse().unwrap();
        assert!(matches!(
            change_user_role(&db, &admin, &jo, Role::Admin),
            Err(Error::Forbidden)
        ));
    }
}
