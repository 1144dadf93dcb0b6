use super::prelude::*;

#[derive(Debug)]
pub struct Credentials<'a> {
    pub email: &'a EmailAddress,
    pub password: &'a str,
}

pub fn login_with_email<R>(repo: &R, login: &Credentials) -> Result<Role>
where
    R: UserRepo,
{
    repo.try_get_user_by_email(login.email)
        .map_err(Error::Repo)
        .and_then(|user| {
            if let Some(u) = user {
                if u.password.verify(login.password) {
                    if u.is_banned() {
                        Err(Error::AccountBanned)
                    } else if u.email_confirmed {
                        Ok(u.role)
                    } else {
                        Err(Error::EmailNotConfirmed)
                    }
                } else {
                    Err(Error::Credentials)
                }
            } else {
                Err(Error::Credentials)
            }
        })
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    fn user(email: &str) -> User {
        User {
            email: email.parse().unwrap(),
            email_confirmed: true,
            password: "secret".parse::<Password>().unwrap(),
            display_name: None,
            role: Role::User,
            banned_at: None,
        }
    }

    #[test]
    fn login_with_valid_credentials() {
        let db = MockDb::default();
        db.users.borrow_mut().push(user("a@bar.tld"));
        let credentials = Credentials {
            email: &"a@bar.tld".parse().unwrap(),
            password: "secret",
        };
        assert_eq!(Role::User, login_with_email(&db, &credentials).unwrap());
    }

    #[test]
    fn login_with_wrong_password() {
        let db = MockDb::default();
        db.users.borrow_mut().push(user("a@bar.tld"));
        let credentials = Credentials {
            email: &"a@bar.tld".parse().unwrap(),
            password: "wrong",
        };
        assert!(matches!(
            login_with_email(&db, &credentials),
            Err(Error::Credentials)
        ));
    }

    #[test]
    fn login_with_unknown_email() {
        let db = MockDb::default();
        let credentials = Credentials {
            email: &"nobody@bar.tld".parse().unwrap(),
            password: "secret",
        };
        assert!(matches!(
            login_with_email(&db, &credentials),
            Err(Error::Credentials)
        ));
    }

    #[test]
    fn login_with_unconfirmed_email() {
        let db = MockDb::default();
        let mut u = user("a@bar.tld");
        u.email_confirmed = false;
        db.users.borrow_mut().push(u);
        let credentials = Credentials {
            email: &"a@bar.tld".parse().unwrap(),
            password: "secret",
        };
        assert!(matches!(
            login_with_email(&db, &credentials),
            Err(Error::EmailNotConfirmed)
        ));
    }

    #[test]
    fn login_with_banned_account() {
        let db = MockDb::default();
        let mut u = user("a@bar.tld");
        u.banned_at = Some(Timestamp::now());
        db.users.borrow_mut().push(u);
        let credentials = Credentials {
            email: &"a@bar.tld".parse().unwrap(),
            password: "secret",
        };
        assert!(matches!(
            login_with_email(&db, &credentials),
            Err(Error::AccountBanned)
        ));
    }
}
