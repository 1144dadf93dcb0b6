use passwords::PasswordGenerator;

use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: EmailAddress,
    pub password: String,
    pub display_name: Option<String>,
}

pub fn create_new_user<R: UserRepo>(repo: &R, u: NewUser) -> Result<()> {
    let password = u.password.parse::<Password>()?;
    if !validate::is_valid_email(u.email.as_str()) {
        return Err(Error::EmailAddress);
    }
    if repo.try_get_user_by_email(&u.email)?.is_some() {
        return Err(Error::UserExists);
    }
    let new_user = User {
        email: u.email,
        email_confirmed: false,
        password,
        display_name: u.display_name.filter(|n| !n.trim().is_empty()),
        role: Role::Guest,
        banned_at: None,
    };
    log::debug!("Creating new user: email = {}", new_user.email);
    repo.create_user(&new_user)?;
    Ok(())
}

const PW_GEN: PasswordGenerator = PasswordGenerator {
    length: 8,
    numbers: true,
    lowercase_letters: true,
    uppercase_letters: true,
    symbols: true,
    strict: false,
    exclude_similar_characters: true,
    spaces: false,
};

pub fn create_user_from_email<R>(repo: &R, email: EmailAddress) -> Result<User>
where
    R: UserRepo,
{
    if let Some(user) = repo.try_get_user_by_email(&email)? {
        return Ok(user);
    }
    // Create a new user with a generated password
    let password = PW_GEN
        .generate_one()
        .expect("Could not generate a new password");
    let new_user = NewUser {
        email: email.clone(),
        password,
        display_name: None,
    };
    create_new_user(repo, new_user)?;
    Ok(repo.get_user_by_email(&email)?)
}
