use tw_core::gateways::oauth::OAuthGateway;

use super::*;
use crate::error::AppError;

pub fn oauth_login(
    connections: &sqlite::Connections,
    oauth: &dyn OAuthGateway,
    provider: OAuthProvider,
    access_token: &str,
) -> Result<User> {
    // Token resolution talks to the provider and happens outside
    // of the database transaction.
    let profile = oauth.fetch_profile(provider, access_token).map_err(|err| {
        warn!("Failed to resolve a {} access token: {}", provider, err);
        AppError::from(usecases::Error::Credentials)
    })?;
    debug_assert_eq!(provider, profile.provider);

    Ok(connections.exclusive()?.transaction(|conn| {
        let user = usecases::login_with_oauth_profile(conn, profile).map_err(|err| {
            warn!("Failed to log in a {} profile: {}", provider, err);
            err
        })?;
        usecases::record_activity(
            conn,
            AuditLogEntry::new(Activity::now(Some(user.email.clone())), "user.oauth_login")
                .context(provider.as_str()),
        )?;
        Ok::<_, usecases::Error>(user)
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    fn oauth_login(fixture: &BackendFixture, profile: ExternalProfile) -> super::Result<User> {
        let gw = StaticProfileOAuthGW(profile.clone());
        super::oauth_login(
            &fixture.db_connections,
            &gw,
            profile.provider,
            "an-access-token",
        )
    }

    fn google_profile(external_id: &str, email: &str) -> ExternalProfile {
        ExternalProfile {
            provider: OAuthProvider::Google,
            external_id: external_id.into(),
            email: email.parse().unwrap(),
            display_name: Some("Jo".into()),
        }
    }

    #[test]
    fn first_login_should_create_a_confirmed_account() {
        let fixture = BackendFixture::new();

        let user = oauth_login(&fixture, google_profile("g-1", "jo@bar.tld")).unwrap();
        assert!(user.email_confirmed);
        assert_eq!(Role::User, user.role);

        let db = fixture.db_connections.shared().unwrap();
        assert!(db
            .try_get_identity(OAuthProvider::Google, "g-1")
            .unwrap()
            .is_some());
    }

    #[test]
    fn repeated_logins_should_reuse_the_link() {
        let fixture = BackendFixture::new();

        oauth_login(&fixture, google_profile("g-1", "jo@bar.tld")).unwrap();
        let again = oauth_login(&fixture, google_profile("g-1", "jo@bar.tld")).unwrap();
        assert_eq!("jo@bar.tld", again.email.as_str());

        let db = fixture.db_connections.shared().unwrap();
        assert_eq!(1, db.get_identities_by_email(&again.email).unwrap().len());
    }

    #[test]
    fn banned_accounts_should_stay_locked_out() {
        let fixture = BackendFixture::new();
        let admin = fixture.create_admin("admin@bar.tld");
        let user = oauth_login(&fixture, google_profile("g-1", "jo@bar.tld")).unwrap();
        flows::ban_user(&fixture.db_connections, &admin, &user.email).unwrap();

        assert!(matches!(
            oauth_login(&fixture, google_profile("g-1", "jo@bar.tld")),
            Err(AppError::Business(BError::Parameter(
                usecases::Error::AccountBanned
            )))
        ));
    }
}
