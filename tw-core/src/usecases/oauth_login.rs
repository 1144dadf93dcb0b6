use super::prelude::*;
use crate::{gateways::oauth::ExternalProfile, usecases, RepoError};

/// Logs a user in with a verified profile from an external provider.
///
/// Creates the local account on first contact. The provider has
/// already verified the email address, so the account is confirmed
/// right away and receives a generated password that is never
/// handed out.
pub fn login_with_oauth_profile<D>(db: &D, profile: ExternalProfile) -> Result<User>
where
    D: UserRepo + IdentityRepo,
{
    let ExternalProfile {
        provider,
        external_id,
        email,
        display_name,
    } = profile;
    let linked = db.try_get_identity(provider, &external_id)?;
    let email = match &linked {
        Some(identity) => identity.email.clone(),
        None => email,
    };
    let mut user = usecases::create_user_from_email(db, email)?;
    if user.is_banned() {
        return Err(Error::AccountBanned);
    }
    let mut modified = false;
    if !user.email_confirmed {
        user.email_confirmed = true;
        modified = true;
    }
    if user.role == Role::Guest {
        user.role = Role::User;
        modified = true;
    }
    if user.display_name.is_none() {
        if let Some(name) = display_name.filter(|n| !n.trim().is_empty()) {
            user.display_name = Some(name);
            modified = true;
        }
    }
    if modified {
        db.update_user(&user)?;
    }
    if linked.is_none() {
        log::info!("Linking {} identity to {}", provider, user.email);
        db.create_identity(&ExternalIdentity {
            email: user.email.clone(),
            provider,
            external_id,
            linked_at: Timestamp::now(),
        })?;
    }
    Ok(user)
}

/// Removes all links to the given external account, e.g. when the
/// provider reports that the user revoked access.
///
/// The local account and its data remain untouched. Returns the
/// address of the affected account.
pub fn unlink_external_identities<D>(
    db: &D,
    provider: OAuthProvider,
    external_id: &str,
) -> Result<EmailAddress>
where
    D: IdentityRepo,
{
    let identity = db
        .try_get_identity(provider, external_id)?
        .ok_or(Error::Repo(RepoError::NotFound))?;
    let removed = db.delete_identities(provider, external_id)?;
    log::info!(
        "Unlinked {} {} identities of {}",
        removed,
        provider,
        identity.email
    );
    Ok(identity.email)
}
