use super::prelude::*;

pub fn get_user<R>(
    repo: &R,
    logged_in_email: &EmailAddress,
    requested_email: &EmailAddress,
) -> Result<User>
where
    R: UserRepo,
{
    if logged_in_email != requested_email {
        return Err(Error::Forbidden);
    }
    Ok(repo.get_user_by_email(requested_email)?)
}

/// Paginated user listing for the admin surface.
pub fn list_users<R>(repo: &R, pagination: &Pagination) -> Result<Vec<User>>
where
    R: UserRepo,
{
    let users = repo.all_users()?;
    let offset = pagination.offset.unwrap_or(0) as usize;
    let mut users: Vec<_> = users.into_iter().skip(offset).collect();
    if let Some(limit) = pagination.limit {
        users.truncate(limit as usize);
    }
    Ok(users)
}
