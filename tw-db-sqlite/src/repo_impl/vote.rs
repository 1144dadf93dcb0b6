use super::*;

impl VoteRepo for DbReadOnly<'_> {
    fn upsert_vote(&self, _vote: &PlaceVote) -> Result<()> {
        unreachable!();
    }
    fn delete_votes_for_place(&self, _trip: &Id, _place: &Id) -> Result<usize> {
        unreachable!();
    }

    fn votes_of_trip(&self, trip: &Id) -> Result<Vec<PlaceVote>> {
        votes_of_trip(&mut self.conn.borrow_mut(), trip)
    }
    fn votes_for_place(&self, trip: &Id, place: &Id) -> Result<Vec<PlaceVote>> {
        votes_for_place(&mut self.conn.borrow_mut(), trip, place)
    }
}

impl VoteRepo for DbReadWrite<'_> {
    fn upsert_vote(&self, vote: &PlaceVote) -> Result<()> {
        upsert_vote(&mut self.conn.borrow_mut(), vote)
    }
    fn delete_votes_for_place(&self, trip: &Id, place: &Id) -> Result<usize> {
        delete_votes_for_place(&mut self.conn.borrow_mut(), trip, place)
    }

    fn votes_of_trip(&self, trip: &Id) -> Result<Vec<PlaceVote>> {
        votes_of_trip(&mut self.conn.borrow_mut(), trip)
    }
    fn votes_for_place(&self, trip: &Id, place: &Id) -> Result<Vec<PlaceVote>> {
        votes_for_place(&mut self.conn.borrow_mut(), trip, place)
    }
}

impl VoteRepo for DbConnection<'_> {
    fn upsert_vote(&self, vote: &PlaceVote) -> Result<()> {
        upsert_vote(&mut self.conn.borrow_mut(), vote)
    }
    fn delete_votes_for_place(&self, trip: &Id, place: &Id) -> Result<usize> {
        delete_votes_for_place(&mut self.conn.borrow_mut(), trip, place)
    }

    fn votes_of_trip(&self, trip: &Id) -> Result<Vec<PlaceVote>> {
        votes_of_trip(&mut self.conn.borrow_mut(), trip)
    }
    fn votes_for_place(&self, trip: &Id, place: &Id) -> Result<Vec<PlaceVote>> {
        votes_for_place(&mut self.conn.borrow_mut(), trip, place)
    }
}

fn load_place_vote(trip: &Id, model: models::JoinedPlaceVote) -> Result<PlaceVote> {
    let models::JoinedPlaceVote {
        score,
        cast_at,
        place_id,
        voter_email,
    } = model;
    Ok(PlaceVote {
        trip: trip.clone(),
        place: place_id.into(),
        voter: EmailAddress::new_unchecked(voter_email),
        score: load_vote_score(score)?,
        cast_at: Timestamp::from_secs(cast_at),
    })
}

fn upsert_vote(conn: &mut SqliteConnection, vote: &PlaceVote) -> Result<()> {
    use schema::trip_place_votes::dsl;
    let trip_rowid = resolve_trip_rowid(conn, &vote.trip)?;
    let place_rowid = resolve_place_rowid(conn, vote.place.as_str())?;
    let user_id = resolve_user_id_by_email(conn, &vote.voter)?;
    let model = models::NewPlaceVote {
        trip_rowid,
        place_rowid,
        user_id,
        score: u8::from(vote.score) as i16,
        cast_at: vote.cast_at.as_secs(),
    };
    // A voter casts at most one vote per place, recasting replaces it.
    match diesel::insert_into(schema::trip_place_votes::table)
        .values(&model)
        .execute(conn)
    {
        Ok(_) => Ok(()),
        Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
            let _count = diesel::update(
                dsl::trip_place_votes
                    .filter(dsl::trip_rowid.eq(trip_rowid))
                    .filter(dsl::place_rowid.eq(place_rowid))
                    .filter(dsl::user_id.eq(user_id)),
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

fn delete_votes_for_place(conn: &mut SqliteConnection, trip: &Id, place: &Id) -> Result<usize> {
    use schema::{places::dsl as p_dsl, trip_place_votes::dsl as v_dsl, trips::dsl as t_dsl};
    let trip_rowids = t_dsl::trips
        .select(t_dsl::rowid)
        .filter(t_dsl::id.eq(trip.as_str()));
    let place_rowids = p_dsl::places
        .select(p_dsl::rowid)
        .filter(p_dsl::id.eq(place.as_str()));
    diesel::delete(
        v_dsl::trip_place_votes
            .filter(v_dsl::trip_rowid.eq_any(trip_rowids))
            .filter(v_dsl::place_rowid.eq_any(place_rowids)),
    )
    .execute(conn)
    .map_err(from_diesel_err)
}

fn votes_of_trip(conn: &mut SqliteConnection, trip: &Id) -> Result<Vec<PlaceVote>> {
    use schema::{
        places::dsl as p_dsl, trip_place_votes::dsl as v_dsl, trips::dsl as t_dsl,
        users::dsl as u_dsl,
    };
    let trip_rowids = t_dsl::trips
        .select(t_dsl::rowid)
        .filter(t_dsl::id.eq(trip.as_str()));
    v_dsl::trip_place_votes
        .inner_join(schema::places::table)
        .inner_join(schema::users::table)
        .select((v_dsl::score, v_dsl::cast_at, p_dsl::id, u_dsl::email))
        .filter(v_dsl::trip_rowid.eq_any(trip_rowids))
        .order_by(v_dsl::cast_at.asc())
        .load::<models::JoinedPlaceVote>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|model| load_place_vote(trip, model))
        .collect()
}

fn votes_for_place(conn: &mut SqliteConnection, trip: &Id, place: &Id) -> Result<Vec<PlaceVote>> {
    use schema::{
        places::dsl as p_dsl, trip_place_votes::dsl as v_dsl, trips::dsl as t_dsl,
        users::dsl as u_dsl,
    };
    let trip_rowids = t_dsl::trips
        .select(t_dsl::rowid)
        .filter(t_dsl::id.eq(trip.as_str()));
    v_dsl::trip_place_votes
        .inner_join(schema::places::table)
        .inner_join(schema::users::table)
        .select((v_dsl::score, v_dsl::cast_at, p_dsl::id, u_dsl::email))
        .filter(v_dsl::trip_rowid.eq_any(trip_rowids))
        .filter(p_dsl::id.eq(place.as_str()))
        .order_by(v_dsl::cast_at.asc())
        .load::<models::JoinedPlaceVote>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|model| load_place_vote(trip, model))
        .collect()
}
