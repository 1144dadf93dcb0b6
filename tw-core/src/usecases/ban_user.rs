use super::prelude::*;

pub fn ban_user<D: Db>(
    db: &D,
    admin_email: &EmailAddress,
    user_email: &EmailAddress,
) -> Result<()> {
    let admin = db
        .try_get_user_by_email(admin_email)?
        .ok_or(Error::UserDoesNotExist)?;
    let mut user = db
        .try_get_user_by_email(user_email)?
        .ok_or(Error::UserDoesNotExist)?;
    if admin.role <= user.role {
        return Err(Error::Forbidden);
    }
    if user.is_banned() {
        return Ok(());
    }
    log::info!("Banning user {}", user_email);
    user.banned_at = Some(Timestamp::now());
    db.update_user(&user)?;
    Ok(())
}

pub fn unban_user<D: Db>(
    db: &D,
    admin_email: &EmailAddress,
    user_email: &EmailAddress,
) -> Result<()> {
    let admin = db
        .try_get_user_by_email(admin_email)?
        .ok_or(Error::UserDoesNotExist)?;
    let mut user = db
        .try_get_user_by_email(user_email)?
        .ok_or(Error::UserDoesNotExist)?;
    if admin.role <= user.role {
        return Err(Error::Forbidden);
    }
    if !user.is_banned() {
        return Ok(());
    }
    log::info!("Unbanning user {}", user_email);
    user.banned_at = None;
    db.update_user(&user)?;
    Ok(())
}
