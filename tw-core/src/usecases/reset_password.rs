use super::prelude::*;
use crate::usecases;

/// First half of the password reset: issue a fresh email nonce that
/// is sent to the user out of band.
pub fn reset_password_request<R>(repo: &R, email: &EmailAddress) -> Result<EmailNonce>
where
    R: UserRepo + UserTokenRepo,
{
    // Verify that the user exists, the nonce would be worthless
    // otherwise.
    let user = repo.get_user_by_email(email)?;
    usecases::refresh_user_token(repo, user.email)
}

pub fn confirm_email_and_reset_password<R>(
    repo: &R,
    email: &EmailAddress,
    new_password: Password,
) -> Result<()>
where
    R: UserRepo,
{
    log::info!("Resetting password for user ({})", email);
    let mut user = repo.get_user_by_email(email)?;
    debug_assert_eq!(&user.email, email);
    user.email_confirmed = true;
    if user.role == Role::Guest {
        user.role = Role::User;
    }
    user.password = new_password;
    repo.update_user(&user)?;
    Ok(())
}
