use super::*;

impl MembershipRepo for DbReadOnly<'_> {
    fn create_membership(&self, _membership: &TripMembership) -> Result<()> {
        unreachable!();
    }
    fn update_membership(&self, _membership: &TripMembership) -> Result<()> {
        unreachable!();
    }
    fn delete_membership(&self, _trip: &Id, _member: &EmailAddress) -> Result<()> {
        unreachable!();
    }

    fn get_membership(&self, trip: &Id, member: &EmailAddress) -> Result<TripMembership> {
        get_membership(&mut self.conn.borrow_mut(), trip, member)
    }
    fn try_get_membership(
        &self,
        trip: &Id,
        member: &EmailAddress,
    ) -> Result<Option<TripMembership>> {
        try_get_membership(&mut self.conn.borrow_mut(), trip, member)
    }
    fn memberships_of_trip(&self, trip: &Id) -> Result<Vec<TripMembership>> {
        memberships_of_trip(&mut self.conn.borrow_mut(), trip)
    }
}

impl MembershipRepo for DbReadWrite<'_> {
    fn create_membership(&self, membership: &TripMembership) -> Result<()> {
        create_membership(&mut self.conn.borrow_mut(), membership)
    }
    fn update_membership(&self, membership: &TripMembership) -> Result<()> {
        update_membership(&mut self.conn.borrow_mut(), membership)
    }
    fn delete_membership(&self, trip: &Id, member: &EmailAddress) -> Result<()> {
        delete_membership(&mut self.conn.borrow_mut(), trip, member)
    }

    fn get_membership(&self, trip: &Id, member: &EmailAddress) -> Result<TripMembership> {
        get_membership(&mut self.conn.borrow_mut(), trip, member)
    }
    fn try_get_membership(
        &self,
        trip: &Id,
        member: &EmailAddress,
    ) -> Result<Option<TripMembership>> {
        try_get_membership(&mut self.conn.borrow_mut(), trip, member)
    }
    fn memberships_of_trip(&self, trip: &Id) -> Result<Vec<TripMembership>> {
        memberships_of_trip(&mut self.conn.borrow_mut(), trip)
    }
}

impl MembershipRepo for DbConnection<'_> {
    fn create_membership(&self, membership: &TripMembership) -> Result<()> {
        create_membership(&mut self.conn.borrow_mut(), membership)
    }
    fn update_membership(&self, membership: &TripMembership) -> Result<()> {
        update_membership(&mut self.conn.borrow_mut(), membership)
    }
    fn delete_membership(&self, trip: &Id, member: &EmailAddress) -> Result<()> {
        delete_membership(&mut self.conn.borrow_mut(), trip, member)
    }

    fn get_membership(&self, trip: &Id, member: &EmailAddress) -> Result<TripMembership> {
        get_membership(&mut self.conn.borrow_mut(), trip, member)
    }
    fn try_get_membership(
        &self,
        trip: &Id,
        member: &EmailAddress,
    ) -> Result<Option<TripMembership>> {
        try_get_membership(&mut self.conn.borrow_mut(), trip, member)
    }
    fn memberships_of_trip(&self, trip: &Id) -> Result<Vec<TripMembership>> {
        memberships_of_trip(&mut self.conn.borrow_mut(), trip)
    }
}

fn load_membership(trip: &Id, model: models::JoinedTripMember) -> Result<TripMembership> {
    let models::JoinedTripMember {
        role,
        status,
        invited_at,
        responded_at,
        member_email,
    } = model;
    Ok(TripMembership {
        trip: trip.clone(),
        member: EmailAddress::new_unchecked(member_email),
        role: load_member_role(role)?,
        status: load_membership_status(status)?,
        invited_at: Timestamp::from_secs(invited_at),
        responded_at: responded_at.map(Timestamp::from_secs),
    })
}

fn new_trip_member_model(
    conn: &mut SqliteConnection,
    membership: &TripMembership,
) -> Result<models::NewTripMember> {
    let trip_rowid = resolve_trip_rowid(conn, &membership.trip)?;
    let user_id = resolve_user_id_by_email(conn, &membership.member)?;
    Ok(models::NewTripMember {
        trip_rowid,
        user_id,
        role: MemberRolePrimitive::from(membership.role),
        status: MembershipStatusPrimitive::from(membership.status),
        invited_at: membership.invited_at.as_secs(),
        responded_at: membership.responded_at.map(Timestamp::as_secs),
    })
}

fn create_membership(conn: &mut SqliteConnection, membership: &TripMembership) -> Result<()> {
    let model = new_trip_member_model(conn, membership)?;
    match diesel::insert_into(schema::trip_members::table)
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

fn update_membership(conn: &mut SqliteConnection, membership: &TripMembership) -> Result<()> {
    use schema::trip_members::dsl;
    let model = new_trip_member_model(conn, membership)?;
    let count = diesel::update(
        dsl::trip_members
            .filter(dsl::trip_rowid.eq(model.trip_rowid))
            .filter(dsl::user_id.eq(model.user_id)),
    )
    .set(&model)
    .execute(conn)
    .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn delete_membership(conn: &mut SqliteConnection, trip: &Id, member: &EmailAddress) -> Result<()> {
    use schema::{trip_members::dsl as m_dsl, trips::dsl as t_dsl, users::dsl as u_dsl};
    let trip_rowids = t_dsl::trips
        .select(t_dsl::rowid)
        .filter(t_dsl::id.eq(trip.as_str()));
    let user_ids = u_dsl::users
        .select(u_dsl::id)
        .filter(u_dsl::email.eq(member.as_str()));
    let count = diesel::delete(
        m_dsl::trip_members
            .filter(m_dsl::trip_rowid.eq_any(trip_rowids))
            .filter(m_dsl::user_id.eq_any(user_ids)),
    )
    .execute(conn)
    .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_membership(
    conn: &mut SqliteConnection,
    trip: &Id,
    member: &EmailAddress,
) -> Result<TripMembership> {
    use schema::{trip_members::dsl as m_dsl, trips::dsl as t_dsl, users::dsl as u_dsl};
    let trip_rowids = t_dsl::trips
        .select(t_dsl::rowid)
        .filter(t_dsl::id.eq(trip.as_str()));
    m_dsl::trip_members
        .inner_join(schema::users::table)
        .select((
            m_dsl::role,
            m_dsl::status,
            m_dsl::invited_at,
            m_dsl::responded_at,
            u_dsl::email,
        ))
        .filter(m_dsl::trip_rowid.eq_any(trip_rowids))
        .filter(u_dsl::email.eq(member.as_str()))
        .first::<models::JoinedTripMember>(conn)
        .map_err(from_diesel_err)
        .and_then(|model| load_membership(trip, model))
}

fn try_get_membership(
    conn: &mut SqliteConnection,
    trip: &Id,
    member: &EmailAddress,
) -> Result<Option<TripMembership>> {
    use schema::{trip_members::dsl as m_dsl, trips::dsl as t_dsl, users::dsl as u_dsl};
    let trip_rowids = t_dsl::trips
        .select(t_dsl::rowid)
        .filter(t_dsl::id.eq(trip.as_str()));
    m_dsl::trip_members
        .inner_join(schema::users::table)
        .select((
            m_dsl::role,
            m_dsl::status,
            m_dsl::invited_at,
            m_dsl::responded_at,
            u_dsl::email,
        ))
        .filter(m_dsl::trip_rowid.eq_any(trip_rowids))
        .filter(u_dsl::email.eq(member.as_str()))
        .first::<models::JoinedTripMember>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(|model| load_membership(trip, model))
        .transpose()
}

fn memberships_of_trip(conn: &mut SqliteConnection, trip: &Id) -> Result<Vec<TripMembership>> {
    use schema::{trip_members::dsl as m_dsl, trips::dsl as t_dsl, users::dsl as u_dsl};
    let trip_rowids = t_dsl::trips
        .select(t_dsl::rowid)
        .filter(t_dsl::id.eq(trip.as_str()));
    m_dsl::trip_members
        .inner_join(schema::users::table)
        .select((
            m_dsl::role,
            m_dsl::status,
            m_dsl::invited_at,
            m_dsl::responded_at,
            u_dsl::email,
        ))
        .filter(m_dsl::trip_rowid.eq_any(trip_rowids))
        .order_by(m_dsl::invited_at.asc())
        .load::<models::JoinedTripMember>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|model| load_membership(trip, model))
        .collect()
}
