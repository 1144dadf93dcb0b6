use super::*;

impl ItineraryRepo for DbReadOnly<'_> {
    fn save_itinerary(&self, _itinerary: &TripItinerary) -> Result<()> {
        unreachable!();
    }
    fn delete_itinerary(&self, _trip: &Id) -> Result<()> {
        unreachable!();
    }

    fn try_get_itinerary(&self, trip: &Id) -> Result<Option<TripItinerary>> {
        try_get_itinerary(&mut self.conn.borrow_mut(), trip)
    }
}

impl ItineraryRepo for DbReadWrite<'_> {
    fn save_itinerary(&self, itinerary: &TripItinerary) -> Result<()> {
        save_itinerary(&mut self.conn.borrow_mut(), itinerary)
    }
    fn delete_itinerary(&self, trip: &Id) -> Result<()> {
        delete_itinerary(&mut self.conn.borrow_mut(), trip)
    }

    fn try_get_itinerary(&self, trip: &Id) -> Result<Option<TripItinerary>> {
        try_get_itinerary(&mut self.conn.borrow_mut(), trip)
    }
}

impl ItineraryRepo for DbConnection<'_> {
    fn save_itinerary(&self, itinerary: &TripItinerary) -> Result<()> {
        save_itinerary(&mut self.conn.borrow_mut(), itinerary)
    }
    fn delete_itinerary(&self, trip: &Id) -> Result<()> {
        delete_itinerary(&mut self.conn.borrow_mut(), trip)
    }

    fn try_get_itinerary(&self, trip: &Id) -> Result<Option<TripItinerary>> {
        try_get_itinerary(&mut self.conn.borrow_mut(), trip)
    }
}

// Cached itineraries are replaced wholesale, never patched.
fn save_itinerary(conn: &mut SqliteConnection, itinerary: &TripItinerary) -> Result<()> {
    use schema::{trip_itineraries::dsl as h_dsl, trip_itinerary_items::dsl as i_dsl};
    let trip_rowid = resolve_trip_rowid(conn, &itinerary.trip)?;
    let mut items = Vec::with_capacity(itinerary.item_count());
    for day in &itinerary.days {
        for item in &day.items {
            let place_rowid = resolve_place_rowid(conn, item.place.as_str())?;
            items.push(models::NewTripItineraryItem {
                trip_rowid,
                day: day.day as i32,
                order_index: item.order_index as i32,
                place_rowid,
                is_fixed: item.is_fixed,
            });
        }
    }
    diesel::delete(i_dsl::trip_itinerary_items.filter(i_dsl::trip_rowid.eq(trip_rowid)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    diesel::delete(h_dsl::trip_itineraries.filter(h_dsl::trip_rowid.eq(trip_rowid)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    let header = models::NewTripItinerary {
        trip_rowid,
        generated_at: itinerary.generated_at.as_secs(),
    };
    diesel::insert_into(schema::trip_itineraries::table)
        .values(&header)
        .execute(conn)
        .map_err(from_diesel_err)?;
    diesel::insert_into(schema::trip_itinerary_items::table)
        .values(&items)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn delete_itinerary(conn: &mut SqliteConnection, trip: &Id) -> Result<()> {
    use schema::{
        trip_itineraries::dsl as h_dsl, trip_itinerary_items::dsl as i_dsl,
        trips::dsl as t_dsl,
    };
    let trip_rowids = t_dsl::trips
        .select(t_dsl::rowid)
        .filter(t_dsl::id.eq(trip.as_str()));
    diesel::delete(i_dsl::trip_itinerary_items.filter(i_dsl::trip_rowid.eq_any(trip_rowids)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    let trip_rowids = t_dsl::trips
        .select(t_dsl::rowid)
        .filter(t_dsl::id.eq(trip.as_str()));
    diesel::delete(h_dsl::trip_itineraries.filter(h_dsl::trip_rowid.eq_any(trip_rowids)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn try_get_itinerary(conn: &mut SqliteConnection, trip: &Id) -> Result<Option<TripItinerary>> {
    use schema::{
        places::dsl as p_dsl, trip_itineraries::dsl as h_dsl,
        trip_itinerary_items::dsl as i_dsl, trips::dsl as t_dsl,
    };
    let trip_rowids = t_dsl::trips
        .select(t_dsl::rowid)
        .filter(t_dsl::id.eq(trip.as_str()));
    let Some(generated_at) = h_dsl::trip_itineraries
        .select(h_dsl::generated_at)
        .filter(h_dsl::trip_rowid.eq_any(trip_rowids))
        .first::<i64>(conn)
        .optional()
        .map_err(from_diesel_err)?
    else {
        return Ok(None);
    };
    // The schedule covers every day of the trip, also those without
    // any item, so the day range is restored from the trip itself.
    let (starts_on, ends_on) = t_dsl::trips
        .select((t_dsl::starts_on, t_dsl::ends_on))
        .filter(t_dsl::id.eq(trip.as_str()))
        .first::<(String, String)>(conn)
        .map_err(from_diesel_err)?;
    let day_count = day_count(&starts_on, &ends_on)?;
    let trip_rowids = t_dsl::trips
        .select(t_dsl::rowid)
        .filter(t_dsl::id.eq(trip.as_str()));
    let items = i_dsl::trip_itinerary_items
        .inner_join(schema::places::table)
        .select((i_dsl::day, i_dsl::order_index, i_dsl::is_fixed, p_dsl::id))
        .filter(i_dsl::trip_rowid.eq_any(trip_rowids))
        .order_by((i_dsl::day.asc(), i_dsl::order_index.asc()))
        .load::<models::JoinedItineraryItem>(conn)
        .map_err(from_diesel_err)?;
    let mut days: Vec<ItineraryDay> = (1..=day_count)
        .map(|day| ItineraryDay {
            day,
            items: Vec::new(),
        })
        .collect();
    for model in items {
        let models::JoinedItineraryItem {
            day,
            order_index,
            is_fixed,
            place_id,
        } = model;
        let item = ItineraryItem {
            place: place_id.into(),
            order_index: order_index as u32,
            is_fixed,
        };
        let day = day as u32;
        match days.iter_mut().find(|entry| entry.day == day) {
            Some(entry) => entry.items.push(item),
            // Items scheduled beyond the current trip span are kept,
            // e.g. after the trip has been shortened.
            None => days.push(ItineraryDay {
                day,
                items: vec![item],
            }),
        }
    }
    Ok(Some(TripItinerary {
        trip: trip.clone(),
        generated_at: Timestamp::from_secs(generated_at),
        days,
    }))
}

fn day_count(starts_on: &str, ends_on: &str) -> Result<u32> {
    let starts_on = util::parse_date(starts_on)?;
    let ends_on = util::parse_date(ends_on)?;
    Ok(((ends_on - starts_on).whole_days() + 1).max(1) as u32)
}
