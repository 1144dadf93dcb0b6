use super::*;

impl TripPlaceRepo for DbReadOnly<'_> {
    fn create_trip_place(&self, _trip_place: &TripPlace) -> Result<()> {
        unreachable!();
    }
    fn update_trip_place(&self, _trip_place: &TripPlace) -> Result<()> {
        unreachable!();
    }
    fn delete_trip_place(&self, _trip: &Id, _place: &Id) -> Result<()> {
        unreachable!();
    }
    fn reorder_trip_places(&self, _trip: &Id, _slots: &[TripPlaceSlot]) -> Result<usize> {
        unreachable!();
    }

    fn get_trip_place(&self, trip: &Id, place: &Id) -> Result<TripPlace> {
        get_trip_place(&mut self.conn.borrow_mut(), trip, place)
    }
    fn try_get_trip_place(&self, trip: &Id, place: &Id) -> Result<Option<TripPlace>> {
        try_get_trip_place(&mut self.conn.borrow_mut(), trip, place)
    }
    fn trip_places(&self, trip: &Id) -> Result<Vec<TripPlace>> {
        trip_places(&mut self.conn.borrow_mut(), trip)
    }
    fn place_ids_of_trip(&self, trip: &Id) -> Result<Vec<Id>> {
        place_ids_of_trip(&mut self.conn.borrow_mut(), trip)
    }
}

impl TripPlaceRepo for DbReadWrite<'_> {
    fn create_trip_place(&self, trip_place: &TripPlace) -> Result<()> {
        create_trip_place(&mut self.conn.borrow_mut(), trip_place)
    }
    fn update_trip_place(&self, trip_place: &TripPlace) -> Result<()> {
        update_trip_place(&mut self.conn.borrow_mut(), trip_place)
    }
    fn delete_trip_place(&self, trip: &Id, place: &Id) -> Result<()> {
        delete_trip_place(&mut self.conn.borrow_mut(), trip, place)
    }
    fn reorder_trip_places(&self, trip: &Id, slots: &[TripPlaceSlot]) -> Result<usize> {
        reorder_trip_places(&mut self.conn.borrow_mut(), trip, slots)
    }

    fn get_trip_place(&self, trip: &Id, place: &Id) -> Result<TripPlace> {
        get_trip_place(&mut self.conn.borrow_mut(), trip, place)
    }
    fn try_get_trip_place(&self, trip: &Id, place: &Id) -> Result<Option<TripPlace>> {
        try_get_trip_place(&mut self.conn.borrow_mut(), trip, place)
    }
    fn trip_places(&self, trip: &Id) -> Result<Vec<TripPlace>> {
        trip_places(&mut self.conn.borrow_mut(), trip)
    }
    fn place_ids_of_trip(&self, trip: &Id) -> Result<Vec<Id>> {
        place_ids_of_trip(&mut self.conn.borrow_mut(), trip)
    }
}

impl TripPlaceRepo for DbConnection<'_> {
    fn create_trip_place(&self, trip_place: &TripPlace) -> Result<()> {
        create_trip_place(&mut self.conn.borrow_mut(), trip_place)
    }
    fn update_trip_place(&self, trip_place: &TripPlace) -> Result<()> {
        update_trip_place(&mut self.conn.borrow_mut(), trip_place)
    }
    fn delete_trip_place(&self, trip: &Id, place: &Id) -> Result<()> {
        delete_trip_place(&mut self.conn.borrow_mut(), trip, place)
    }
    fn reorder_trip_places(&self, trip: &Id, slots: &[TripPlaceSlot]) -> Result<usize> {
        reorder_trip_places(&mut self.conn.borrow_mut(), trip, slots)
    }

    fn get_trip_place(&self, trip: &Id, place: &Id) -> Result<TripPlace> {
        get_trip_place(&mut self.conn.borrow_mut(), trip, place)
    }
    fn try_get_trip_place(&self, trip: &Id, place: &Id) -> Result<Option<TripPlace>> {
        try_get_trip_place(&mut self.conn.borrow_mut(), trip, place)
    }
    fn trip_places(&self, trip: &Id) -> Result<Vec<TripPlace>> {
        trip_places(&mut self.conn.borrow_mut(), trip)
    }
    fn place_ids_of_trip(&self, trip: &Id) -> Result<Vec<Id>> {
        place_ids_of_trip(&mut self.conn.borrow_mut(), trip)
    }
}

fn load_trip_place(trip: &Id, model: models::JoinedTripPlace) -> Result<TripPlace> {
    let models::JoinedTripPlace {
        status,
        is_fixed,
        day,
        order_index,
        note,
        created_at,
        place_id,
        proposed_by_email,
    } = model;
    Ok(TripPlace {
        trip: trip.clone(),
        place: place_id.into(),
        status: load_trip_place_status(status)?,
        is_fixed,
        day: day.map(|day| day as u32),
        order_index: order_index.map(|idx| idx as u32),
        note,
        proposed_by: EmailAddress::new_unchecked(proposed_by_email),
        created_at: Timestamp::from_secs(created_at),
    })
}

fn new_trip_place_model(
    conn: &mut SqliteConnection,
    trip_place: &TripPlace,
) -> Result<models::NewTripPlace> {
    let trip_rowid = resolve_trip_rowid(conn, &trip_place.trip)?;
    let place_rowid = resolve_place_rowid(conn, trip_place.place.as_str())?;
    let proposed_by = resolve_user_id_by_email(conn, &trip_place.proposed_by)?;
    Ok(models::NewTripPlace {
        trip_rowid,
        place_rowid,
        status: TripPlaceStatusPrimitive::from(trip_place.status),
        is_fixed: trip_place.is_fixed,
        day: trip_place.day.map(|day| day as i32),
        order_index: trip_place.order_index.map(|idx| idx as i32),
        note: trip_place.note.clone(),
        proposed_by,
        created_at: trip_place.created_at.as_secs(),
    })
}

fn create_trip_place(conn: &mut SqliteConnection, trip_place: &TripPlace) -> Result<()> {
    let model = new_trip_place_model(conn, trip_place)?;
    match diesel::insert_into(schema::trip_places::table)
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

fn update_trip_place(conn: &mut SqliteConnection, trip_place: &TripPlace) -> Result<()> {
    use schema::trip_places::dsl;
    let model = new_trip_place_model(conn, trip_place)?;
    let count = diesel::update(
        dsl::trip_places
            .filter(dsl::trip_rowid.eq(model.trip_rowid))
            .filter(dsl::place_rowid.eq(model.place_rowid)),
    )
    .set(&model)
    .execute(conn)
    .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn delete_trip_place(conn: &mut SqliteConnection, trip: &Id, place: &Id) -> Result<()> {
    use schema::{places::dsl as p_dsl, trip_places::dsl as tp_dsl, trips::dsl as t_dsl};
    let trip_rowids = t_dsl::trips
        .select(t_dsl::rowid)
        .filter(t_dsl::id.eq(trip.as_str()));
    let place_rowids = p_dsl::places
        .select(p_dsl::rowid)
        .filter(p_dsl::id.eq(place.as_str()));
    let count = diesel::delete(
        tp_dsl::trip_places
            .filter(tp_dsl::trip_rowid.eq_any(trip_rowids))
            .filter(tp_dsl::place_rowid.eq_any(place_rowids)),
    )
    .execute(conn)
    .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_trip_place(conn: &mut SqliteConnection, trip: &Id, place: &Id) -> Result<TripPlace> {
    use schema::{
        places::dsl as p_dsl, trip_places::dsl as tp_dsl, trips::dsl as t_dsl,
        users::dsl as u_dsl,
    };
    let trip_rowids = t_dsl::trips
        .select(t_dsl::rowid)
        .filter(t_dsl::id.eq(trip.as_str()));
    tp_dsl::trip_places
        .inner_join(schema::places::table)
        .inner_join(schema::users::table)
        .select((
            tp_dsl::status,
            tp_dsl::is_fixed,
            tp_dsl::day,
            tp_dsl::order_index,
            tp_dsl::note,
            tp_dsl::created_at,
            p_dsl::id,
            u_dsl::email,
        ))
        .filter(tp_dsl::trip_rowid.eq_any(trip_rowids))
        .filter(p_dsl::id.eq(place.as_str()))
        .first::<models::JoinedTripPlace>(conn)
        .map_err(from_diesel_err)
        .and_then(|model| load_trip_place(trip, model))
}

fn try_get_trip_place(
    conn: &mut SqliteConnection,
    trip: &Id,
    place: &Id,
) -> Result<Option<TripPlace>> {
    match get_trip_place(conn, trip, place) {
        Ok(trip_place) => Ok(Some(trip_place)),
        Err(repo::Error::NotFound) => Ok(None),
        Err(err) => Err(err),
    }
}

fn trip_places(conn: &mut SqliteConnection, trip: &Id) -> Result<Vec<TripPlace>> {
    use schema::{
        places::dsl as p_dsl, trip_places::dsl as tp_dsl, trips::dsl as t_dsl,
        users::dsl as u_dsl,
    };
    let trip_rowids = t_dsl::trips
        .select(t_dsl::rowid)
        .filter(t_dsl::id.eq(trip.as_str()));
    tp_dsl::trip_places
        .inner_join(schema::places::table)
        .inner_join(schema::users::table)
        .select((
            tp_dsl::status,
            tp_dsl::is_fixed,
            tp_dsl::day,
            tp_dsl::order_index,
            tp_dsl::note,
            tp_dsl::created_at,
            p_dsl::id,
            u_dsl::email,
        ))
        .filter(tp_dsl::trip_rowid.eq_any(trip_rowids))
        .order_by(tp_dsl::created_at.asc())
        .load::<models::JoinedTripPlace>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|model| load_trip_place(trip, model))
        .collect()
}

fn place_ids_of_trip(conn: &mut SqliteConnection, trip: &Id) -> Result<Vec<Id>> {
    use schema::{places::dsl as p_dsl, trip_places::dsl as tp_dsl, trips::dsl as t_dsl};
    let trip_rowids = t_dsl::trips
        .select(t_dsl::rowid)
        .filter(t_dsl::id.eq(trip.as_str()));
    Ok(tp_dsl::trip_places
        .inner_join(schema::places::table)
        .select(p_dsl::id)
        .filter(tp_dsl::trip_rowid.eq_any(trip_rowids))
        .order_by(tp_dsl::created_at.asc())
        .load::<String>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

// Rolling back on a missing place is left to the enclosing transaction.
fn reorder_trip_places(
    conn: &mut SqliteConnection,
    trip: &Id,
    slots: &[TripPlaceSlot],
) -> Result<usize> {
    use schema::{places::dsl as p_dsl, trip_places::dsl as tp_dsl, trips::dsl as t_dsl};
    let mut total = 0;
    for slot in slots {
        let trip_rowids = t_dsl::trips
            .select(t_dsl::rowid)
            .filter(t_dsl::id.eq(trip.as_str()));
        let place_rowids = p_dsl::places
            .select(p_dsl::rowid)
            .filter(p_dsl::id.eq(slot.place.as_str()));
        let count = diesel::update(
            tp_dsl::trip_places
                .filter(tp_dsl::trip_rowid.eq_any(trip_rowids))
                .filter(tp_dsl::place_rowid.eq_any(place_rowids)),
        )
        .set((
            tp_dsl::day.eq(slot.day.map(|day| day as i32)),
            tp_dsl::order_index.eq(slot.order_index.map(|idx| idx as i32)),
        ))
        .execute(conn)
        .map_err(from_diesel_err)?;
        if count == 0 {
            return Err(repo::Error::NotFound);
        }
        total += count;
    }
    Ok(total)
}
