use super::*;

impl IdentityRepo for DbReadOnly<'_> {
    fn create_identity(&self, _identity: &ExternalIdentity) -> Result<()> {
        unreachable!();
    }

    fn try_get_identity(
        &self,
        provider: OAuthProvider,
        external_id: &str,
    ) -> Result<Option<ExternalIdentity>> {
        try_get_identity(&mut self.conn.borrow_mut(), provider, external_id)
    }
    fn get_identities_by_email(&self, email: &EmailAddress) -> Result<Vec<ExternalIdentity>> {
        get_identities_by_email(&mut self.conn.borrow_mut(), email)
    }

    fn delete_identities(&self, _provider: OAuthProvider, _external_id: &str) -> Result<usize> {
        unreachable!();
    }
    fn delete_identities_by_email(&self, _email: &EmailAddress) -> Result<usize> {
        unreachable!();
    }
}

impl IdentityRepo for DbReadWrite<'_> {
    fn create_identity(&self, identity: &ExternalIdentity) -> Result<()> {
        create_identity(&mut self.conn.borrow_mut(), identity)
    }

    fn try_get_identity(
        &self,
        provider: OAuthProvider,
        external_id: &str,
    ) -> Result<Option<ExternalIdentity>> {
        try_get_identity(&mut self.conn.borrow_mut(), provider, external_id)
    }
    fn get_identities_by_email(&self, email: &EmailAddress) -> Result<Vec<ExternalIdentity>> {
        get_identities_by_email(&mut self.conn.borrow_mut(), email)
    }

    fn delete_identities(&self, provider: OAuthProvider, external_id: &str) -> Result<usize> {
        delete_identities(&mut self.conn.borrow_mut(), provider, external_id)
    }
    fn delete_identities_by_email(&self, email: &EmailAddress) -> Result<usize> {
        delete_identities_by_email(&mut self.conn.borrow_mut(), email)
    }
}

impl IdentityRepo for DbConnection<'_> {
    fn create_identity(&self, identity: &ExternalIdentity) -> Result<()> {
        create_identity(&mut self.conn.borrow_mut(), identity)
    }

    fn try_get_identity(
        &self,
        provider: OAuthProvider,
        external_id: &str,
    ) -> Result<Option<ExternalIdentity>> {
        try_get_identity(&mut self.conn.borrow_mut(), provider, external_id)
    }
    fn get_identities_by_email(&self, email: &EmailAddress) -> Result<Vec<ExternalIdentity>> {
        get_identities_by_email(&mut self.conn.borrow_mut(), email)
    }

    fn delete_identities(&self, provider: OAuthProvider, external_id: &str) -> Result<usize> {
        delete_identities(&mut self.conn.borrow_mut(), provider, external_id)
    }
    fn delete_identities_by_email(&self, email: &EmailAddress) -> Result<usize> {
        delete_identities_by_email(&mut self.conn.borrow_mut(), email)
    }
}

fn load_external_identity(model: models::ExternalIdentityEntity) -> Result<ExternalIdentity> {
    let models::ExternalIdentityEntity {
        provider,
        external_id,
        linked_at,
        user_email,
    } = model;
    let provider = provider
        .parse::<OAuthProvider>()
        .map_err(|_| anyhow!("Invalid OAuth provider: {provider}"))?;
    Ok(ExternalIdentity {
        email: EmailAddress::new_unchecked(user_email),
        provider,
        external_id,
        linked_at: Timestamp::from_secs(linked_at),
    })
}

fn create_identity(conn: &mut SqliteConnection, identity: &ExternalIdentity) -> Result<()> {
    let user_id = resolve_user_id_by_email(conn, &identity.email)?;
    let model = models::NewExternalIdentity {
        user_id,
        provider: identity.provider.as_str(),
        external_id: &identity.external_id,
        linked_at: identity.linked_at.as_secs(),
    };
    match diesel::insert_into(schema::external_identities::table)
        .values(&model)
        .execute(conn)
    {
        Ok(_) => Ok(()),
        Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
            Err(repo::Error::AlreadyExists)
        }
        Err(err) => Err(from_diesel_err(err)),
    }
}

fn try_get_identity(
    conn: &mut SqliteConnection,
    provider: OAuthProvider,
    external_id: &str,
) -> Result<Option<ExternalIdentity>> {
    use schema::{external_identities::dsl as i_dsl, users::dsl as u_dsl};
    i_dsl::external_identities
        .inner_join(u_dsl::users)
        .select((
            i_dsl::provider,
            i_dsl::external_id,
            i_dsl::linked_at,
            u_dsl::email,
        ))
        .filter(i_dsl::provider.eq(provider.as_str()))
        .filter(i_dsl::external_id.eq(external_id))
        .first::<models::ExternalIdentityEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_external_identity)
        .transpose()
}

fn get_identities_by_email(
    conn: &mut SqliteConnection,
    email: &EmailAddress,
) -> Result<Vec<ExternalIdentity>> {
    use schema::{external_identities::dsl as i_dsl, users::dsl as u_dsl};
    i_dsl::external_identities
        .inner_join(u_dsl::users)
        .select((
            i_dsl::provider,
            i_dsl::external_id,
            i_dsl::linked_at,
            u_dsl::email,
        ))
        .filter(u_dsl::email.eq(email.as_str()))
        .load::<models::ExternalIdentityEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_external_identity)
        .collect()
}

fn delete_identities(
    conn: &mut SqliteConnection,
    provider: OAuthProvider,
    external_id: &str,
) -> Result<usize> {
    use schema::external_identities::dsl;
    diesel::delete(
        dsl::external_identities
            .filter(dsl::provider.eq(provider.as_str()))
            .filter(dsl::external_id.eq(external_id)),
    )
    .execute(conn)
    .map_err(from_diesel_err)
}

fn delete_identities_by_email(conn: &mut SqliteConnection, email: &EmailAddress) -> Result<usize> {
    use schema::{external_identities::dsl as i_dsl, users::dsl as u_dsl};
    let user_id_subselect = u_dsl::users
        .select(u_dsl::id)
        .filter(u_dsl::email.eq(email.as_str()));
    diesel::delete(i_dsl::external_identities.filter(i_dsl::user_id.eq_any(user_id_subselect)))
        .execute(conn)
        .map_err(from_diesel_err)
}
