use super::*;

impl PreferenceRepo for DbReadOnly<'_> {
    fn upsert_preference(&self, _preference: &UserPreference) -> Result<()> {
        unreachable!();
    }

    fn preferences_of_user(&self, user: &EmailAddress) -> Result<Vec<UserPreference>> {
        preferences_of_user(&mut self.conn.borrow_mut(), user)
    }
    fn preferences_of_users(&self, users: &[EmailAddress]) -> Result<Vec<UserPreference>> {
        preferences_of_users(&mut self.conn.borrow_mut(), users)
    }
}

impl PreferenceRepo for DbReadWrite<'_> {
    fn upsert_preference(&self, preference: &UserPreference) -> Result<()> {
        upsert_preference(&mut self.conn.borrow_mut(), preference)
    }

    fn preferences_of_user(&self, user: &EmailAddress) -> Result<Vec<UserPreference>> {
        preferences_of_user(&mut self.conn.borrow_mut(), user)
    }
    fn preferences_of_users(&self, users: &[EmailAddress]) -> Result<Vec<UserPreference>> {
        preferences_of_users(&mut self.conn.borrow_mut(), users)
    }
}

impl PreferenceRepo for DbConnection<'_> {
    fn upsert_preference(&self, preference: &UserPreference) -> Result<()> {
        upsert_preference(&mut self.conn.borrow_mut(), preference)
    }

    fn preferences_of_user(&self, user: &EmailAddress) -> Result<Vec<UserPreference>> {
        preferences_of_user(&mut self.conn.borrow_mut(), user)
    }
    fn preferences_of_users(&self, users: &[EmailAddress]) -> Result<Vec<UserPreference>> {
        preferences_of_users(&mut self.conn.borrow_mut(), users)
    }
}

fn load_user_preference(model: models::JoinedUserPreference) -> UserPreference {
    let models::JoinedUserPreference {
        score,
        updated_at,
        user_email,
        category_id,
    } = model;
    UserPreference {
        user: EmailAddress::new_unchecked(user_email),
        category: category_id.into(),
        score: PreferenceScore::clamped(score),
        updated_at: Timestamp::from_secs(updated_at),
    }
}

fn upsert_preference(conn: &mut SqliteConnection, preference: &UserPreference) -> Result<()> {
    use schema::user_preferences::dsl;
    let user_id = resolve_user_id_by_email(conn, &preference.user)?;
    let category_rowid = resolve_category_rowid(conn, preference.category.as_str())?;
    let model = models::NewUserPreference {
        user_id,
        category_rowid,
        score: u8::from(preference.score) as i16,
        updated_at: preference.updated_at.as_secs(),
    };
    match diesel::insert_into(schema::user_preferences::table)
        .values(&model)
        .execute(conn)
    {
        Ok(_) => Ok(()),
        Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
            let _count = diesel::update(
                dsl::user_preferences
                    .filter(dsl::user_id.eq(user_id))
                    .filter(dsl::category_rowid.eq(category_rowid)),
            )
            .set(&model)
            .execute(conn)
            .map_err(from_diesel_err)?;
            debug_assert_eq!(1, _count);
            Ok(())
        }
        Err(err) => Err(from_diesel_err(err)),
    }
}

fn preferences_of_user(
    conn: &mut SqliteConnection,
    user: &EmailAddress,
) -> Result<Vec<UserPreference>> {
    use schema::{
        categories::dsl as c_dsl, user_preferences::dsl as pr_dsl, users::dsl as u_dsl,
    };
    Ok(pr_dsl::user_preferences
        .inner_join(schema::users::table)
        .inner_join(schema::categories::table)
        .select((pr_dsl::score, pr_dsl::updated_at, u_dsl::email, c_dsl::id))
        .filter(u_dsl::email.eq(user.as_str()))
        .order_by(c_dsl::id.asc())
        .load::<models::JoinedUserPreference>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_user_preference)
        .collect())
}

fn preferences_of_users(
    conn: &mut SqliteConnection,
    users: &[EmailAddress],
) -> Result<Vec<UserPreference>> {
    use schema::{
        categories::dsl as c_dsl, user_preferences::dsl as pr_dsl, users::dsl as u_dsl,
    };
    let emails: Vec<_> = users.iter().map(EmailAddress::as_str).collect();
    Ok(pr_dsl::user_preferences
        .inner_join(schema::users::table)
        .inner_join(schema::categories::table)
        .select((pr_dsl::score, pr_dsl::updated_at, u_dsl::email, c_dsl::id))
        .filter(u_dsl::email.eq_any(emails))
        .order_by(c_dsl::id.asc())
        .load::<models::JoinedUserPreference>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_user_preference)
        .collect())
}
