use tw_core::repositories::Error as RepoError;

use super::*;

/// Handles a data-deletion callback from an external login provider.
///
/// Deletes the linked account with everything attached to it and
/// records the deletion in the audit trail. The id of the trail
/// entry is returned as the public confirmation code that the
/// provider polls the status with.
pub fn process_data_deletion_request(
    connections: &sqlite::Connections,
    provider: OAuthProvider,
    external_id: &str,
) -> Result<Id> {
    Ok(connections.exclusive()?.transaction(|conn| {
        let identity = conn.try_get_identity(provider, external_id)?;
        let mut entry = AuditLogEntry::new(Activity::now(None), "user.data_deletion")
            .context(format!("{}:{}", provider, external_id));
        match identity {
            Some(identity) => {
                info!("Deleting all data of {} upon {} request", identity.email, provider);
                conn.delete_identities_by_email(&identity.email)?;
                conn.delete_user_by_email(&identity.email)?;
            }
            None => {
                // Unknown subjects are confirmed as well, there is
                // simply nothing stored to delete.
                entry = entry.comment("no matching account");
            }
        }
        usecases::record_activity(conn, entry)
    })?)
}

/// Status lookup for a previously issued confirmation code.
///
/// The endpoint is public, ids of unrelated audit entries must not
/// resolve here.
pub fn data_deletion_status(connections: &sqlite::Connections, code: &Id) -> Result<AuditLogEntry> {
    let entry = usecases::get_activity(&connections.shared()?, code)?;
    if entry.action != "user.data_deletion" {
        return Err(usecases::Error::Repo(RepoError::NotFound).into());
    }
    Ok(entry)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn should_delete_the_linked_account_and_confirm() {
        let fixture = BackendFixture::new();
        let profile = ExternalProfile {
            provider: OAuthProvider::Facebook,
            external_id: "fb-7".into(),
            email: "jo@bar.tld".parse().unwrap(),
            display_name: None,
        };
        let gw = StaticProfileOAuthGW(profile.clone());
        let user =
            flows::oauth_login(&fixture.db_connections, &gw, OAuthProvider::Facebook, "token")
                .unwrap();

        let code = super::process_data_deletion_request(
            &fixture.db_connections,
            OAuthProvider::Facebook,
            "fb-7",
        )
        .unwrap();

        assert!(fixture.try_get_user(&user.email).is_none());
        let entry = super::data_deletion_status(&fixture.db_connections, &code).unwrap();
        assert_eq!("user.data_deletion", entry.action);
        assert_eq!(Some("facebook:fb-7".to_string()), entry.context);
        assert_eq!(None, entry.comment);
    }

    #[test]
    fn unknown_subjects_should_still_get_a_confirmation_code() {
        let fixture = BackendFixture::new();

        let code = super::process_data_deletion_request(
            &fixture.db_connections,
            OAuthProvider::Facebook,
            "fb-unknown",
        )
        .unwrap();

        let entry = super::data_deletion_status(&fixture.db_connections, &code).unwrap();
        assert_eq!(Some("no matching account".to_string()), entry.comment);
    }

    #[test]
    fn unknown_codes_should_not_resolve() {
        let fixture = BackendFixture::new();
        assert!(super::data_deletion_status(&fixture.db_connections, &Id::new()).is_err());
    }
}
