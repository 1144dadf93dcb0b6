use super::*;

impl TripRepo for DbReadOnly<'_> {
    fn create_trip(&self, _trip: &Trip) -> Result<()> {
        unreachable!();
    }
    fn update_trip(&self, _trip: &Trip) -> Result<()> {
        unreachable!();
    }

    fn get_trip(&self, id: &str) -> Result<Trip> {
        get_trip(&mut self.conn.borrow_mut(), id)
    }
    fn count_trips(&self) -> Result<usize> {
        count_trips(&mut self.conn.borrow_mut())
    }
    fn trips_of_user(&self, user: &EmailAddress) -> Result<Vec<Trip>> {
        trips_of_user(&mut self.conn.borrow_mut(), user)
    }
}

impl TripRepo for DbReadWrite<'_> {
    fn create_trip(&self, trip: &Trip) -> Result<()> {
        create_trip(&mut self.conn.borrow_mut(), trip)
    }
    fn update_trip(&self, trip: &Trip) -> Result<()> {
        update_trip(&mut self.conn.borrow_mut(), trip)
    }

    fn get_trip(&self, id: &str) -> Result<Trip> {
        get_trip(&mut self.conn.borrow_mut(), id)
    }
    fn count_trips(&self) -> Result<usize> {
        count_trips(&mut self.conn.borrow_mut())
    }
    fn trips_of_user(&self, user: &EmailAddress) -> Result<Vec<Trip>> {
        trips_of_user(&mut self.conn.borrow_mut(), user)
    }
}

impl TripRepo for DbConnection<'_> {
    fn create_trip(&self, trip: &Trip) -> Result<()> {
        create_trip(&mut self.conn.borrow_mut(), trip)
    }
    fn update_trip(&self, trip: &Trip) -> Result<()> {
        update_trip(&mut self.conn.borrow_mut(), trip)
    }

    fn get_trip(&self, id: &str) -> Result<Trip> {
        get_trip(&mut self.conn.borrow_mut(), id)
    }
    fn count_trips(&self) -> Result<usize> {
        count_trips(&mut self.conn.borrow_mut())
    }
    fn trips_of_user(&self, user: &EmailAddress) -> Result<Vec<Trip>> {
        trips_of_user(&mut self.conn.borrow_mut(), user)
    }
}

fn load_trip(model: models::JoinedTrip) -> Result<Trip> {
    let models::JoinedTrip {
        id,
        title,
        description,
        starts_on,
        ends_on,
        lat,
        lng,
        created_at,
        archived_at,
        owner_email,
    } = model;
    let start_pos = MapPoint::try_from_lat_lng_deg(lat, lng)
        .map_err(|err| anyhow!("Invalid position of trip {id}: {err}"))?;
    let starts_on = util::parse_date(&starts_on)?;
    let ends_on = util::parse_date(&ends_on)?;
    Ok(Trip {
        id: id.into(),
        owner: EmailAddress::new_unchecked(owner_email),
        title,
        description,
        starts_on,
        ends_on,
        start_pos,
        created_at: Timestamp::from_secs(created_at),
        archived_at: archived_at.map(Timestamp::from_secs),
    })
}

fn new_trip_model<'a>(conn: &mut SqliteConnection, trip: &'a Trip) -> Result<models::NewTrip<'a>> {
    let owner_id = resolve_user_id_by_email(conn, &trip.owner)?;
    Ok(models::NewTrip {
        id: trip.id.as_str(),
        owner_id,
        title: trip.title.clone(),
        description: trip.description.clone(),
        starts_on: util::to_date_string(trip.starts_on),
        ends_on: util::to_date_string(trip.ends_on),
        lat: trip.start_pos.lat().to_deg(),
        lng: trip.start_pos.lng().to_deg(),
        created_at: trip.created_at.as_secs(),
        archived_at: trip.archived_at.map(Timestamp::as_secs),
    })
}

fn create_trip(conn: &mut SqliteConnection, trip: &Trip) -> Result<()> {
    let model = new_trip_model(conn, trip)?;
    match diesel::insert_into(schema::trips::table)
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

fn update_trip(conn: &mut SqliteConnection, trip: &Trip) -> Result<()> {
    use schema::trips::dsl;
    let model = new_trip_model(conn, trip)?;
    let count = diesel::update(dsl::trips.filter(dsl::id.eq(trip.id.as_str())))
        .set(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_trip(conn: &mut SqliteConnection, id: &str) -> Result<Trip> {
    use schema::{trips::dsl as t_dsl, users::dsl as u_dsl};
    t_dsl::trips
        .inner_join(schema::users::table)
        .select((
            t_dsl::id,
            t_dsl::title,
            t_dsl::description,
            t_dsl::starts_on,
            t_dsl::ends_on,
            t_dsl::lat,
            t_dsl::lng,
            t_dsl::created_at,
            t_dsl::archived_at,
            u_dsl::email,
        ))
        .filter(t_dsl::id.eq(id))
        .first::<models::JoinedTrip>(conn)
        .map_err(from_diesel_err)
        .and_then(load_trip)
}

fn count_trips(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::trips::dsl;
    Ok(dsl::trips
        .select(diesel::dsl::count(dsl::rowid))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn trips_of_user(conn: &mut SqliteConnection, user: &EmailAddress) -> Result<Vec<Trip>> {
    use schema::{trip_members::dsl as m_dsl, trips::dsl as t_dsl, users::dsl as u_dsl};
    // The `users` table also appears in the outer join, so the
    // subselects must refer to it through aliases.
    let (owner_users, member_users) =
        diesel::alias!(schema::users as owner_users, schema::users as member_users);
    let declined = MembershipStatusPrimitive::from(MembershipStatus::Declined);
    let owner_ids = owner_users
        .select(owner_users.field(u_dsl::id))
        .filter(owner_users.field(u_dsl::email).eq(user.as_str()));
    let member_trip_rowids = m_dsl::trip_members
        .inner_join(member_users)
        .select(m_dsl::trip_rowid)
        .filter(member_users.field(u_dsl::email).eq(user.as_str()))
        .filter(m_dsl::status.ne(declined));
    t_dsl::trips
        .inner_join(schema::users::table)
        .select((
            t_dsl::id,
            t_dsl::title,
            t_dsl::description,
            t_dsl::starts_on,
            t_dsl::ends_on,
            t_dsl::lat,
            t_dsl::lng,
            t_dsl::created_at,
            t_dsl::archived_at,
            u_dsl::email,
        ))
        .filter(
            t_dsl::owner_id
                .eq_any(owner_ids)
                .or(t_dsl::rowid.eq_any(member_trip_rowids)),
        )
        .order_by(t_dsl::created_at.desc())
        .load::<models::JoinedTrip>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_trip)
        .collect()
}
