use super::*;

impl PlaceRepo for DbReadOnly<'_> {
    fn create_place(&self, _place: &Place) -> Result<()> {
        unreachable!();
    }
    fn update_place(&self, _place: &Place) -> Result<()> {
        unreachable!();
    }

    fn get_place(&self, id: &str) -> Result<Place> {
        get_place(&mut self.conn.borrow_mut(), id)
    }
    fn get_places(&self, ids: &[&str]) -> Result<Vec<Place>> {
        get_places(&mut self.conn.borrow_mut(), ids)
    }
    fn count_places(&self) -> Result<usize> {
        count_places(&mut self.conn.borrow_mut())
    }

    fn search_places(
        &self,
        params: &PlaceSearchParams,
        pagination: &Pagination,
    ) -> Result<Vec<Place>> {
        search_places(&mut self.conn.borrow_mut(), params, pagination)
    }

    fn find_places_near(
        &self,
        center: MapPoint,
        radius: Distance,
        categories: &[Id],
        pagination: &Pagination,
    ) -> Result<Vec<(Place, Distance)>> {
        find_places_near(&mut self.conn.borrow_mut(), center, radius, categories, pagination)
    }
}

impl PlaceRepo for DbReadWrite<'_> {
    fn create_place(&self, place: &Place) -> Result<()> {
        create_place(&mut self.conn.borrow_mut(), place)
    }
    fn update_place(&self, place: &Place) -> Result<()> {
        update_place(&mut self.conn.borrow_mut(), place)
    }

    fn get_place(&self, id: &str) -> Result<Place> {
        get_place(&mut self.conn.borrow_mut(), id)
    }
    fn get_places(&self, ids: &[&str]) -> Result<Vec<Place>> {
        get_places(&mut self.conn.borrow_mut(), ids)
    }
    fn count_places(&self) -> Result<usize> {
        count_places(&mut self.conn.borrow_mut())
    }

    fn search_places(
        &self,
        params: &PlaceSearchParams,
        pagination: &Pagination,
    ) -> Result<Vec<Place>> {
        search_places(&mut self.conn.borrow_mut(), params, pagination)
    }

    fn find_places_near(
        &self,
        center: MapPoint,
        radius: Distance,
        categories: &[Id],
        pagination: &Pagination,
    ) -> Result<Vec<(Place, Distance)>> {
        find_places_near(&mut self.conn.borrow_mut(), center, radius, categories, pagination)
    }
}

impl PlaceRepo for DbConnection<'_> {
    fn create_place(&self, place: &Place) -> Result<()> {
        create_place(&mut self.conn.borrow_mut(), place)
    }
    fn update_place(&self, place: &Place) -> Result<()> {
        update_place(&mut self.conn.borrow_mut(), place)
    }

    fn get_place(&self, id: &str) -> Result<Place> {
        get_place(&mut self.conn.borrow_mut(), id)
    }
    fn get_places(&self, ids: &[&str]) -> Result<Vec<Place>> {
        get_places(&mut self.conn.borrow_mut(), ids)
    }
    fn count_places(&self) -> Result<usize> {
        count_places(&mut self.conn.borrow_mut())
    }

    fn search_places(
        &self,
        params: &PlaceSearchParams,
        pagination: &Pagination,
    ) -> Result<Vec<Place>> {
        search_places(&mut self.conn.borrow_mut(), params, pagination)
    }

    fn find_places_near(
        &self,
        center: MapPoint,
        radius: Distance,
        categories: &[Id],
        pagination: &Pagination,
    ) -> Result<Vec<(Place, Distance)>> {
        find_places_near(&mut self.conn.borrow_mut(), center, radius, categories, pagination)
    }
}

fn load_place(model: models::JoinedPlace) -> Result<Place> {
    let models::JoinedPlace {
        rowid: _,
        id,
        created_ms,
        title,
        description,
        lat,
        lng,
        street,
        zip,
        city,
        country,
        rating,
        rating_count,
        image_url,
        archived_at,
        category_id,
        created_by_email,
    } = model;
    let pos = MapPoint::try_from_lat_lng_deg(lat, lng)
        .map_err(|err| anyhow!("Invalid position of place {id}: {err}"))?;
    let address = Address {
        street,
        zip,
        city,
        country,
    };
    let address = if address.is_empty() {
        None
    } else {
        Some(address)
    };
    Ok(Place {
        id: id.into(),
        created: Activity {
            at: TimestampMs::from_millis(created_ms),
            by: created_by_email.map(EmailAddress::new_unchecked),
        },
        title,
        description,
        location: Location { pos, address },
        category: category_id.into(),
        rating: rating.map(Into::into),
        rating_count: rating_count as u64,
        image_url,
        archived_at: archived_at.map(Timestamp::from_secs),
    })
}

fn new_place_model<'a>(
    conn: &mut SqliteConnection,
    place: &'a Place,
) -> Result<models::NewPlace<'a>> {
    let category_rowid = resolve_category_rowid(conn, place.category.as_str())?;
    let created_by = place
        .created
        .by
        .as_ref()
        .map(|email| resolve_user_id_by_email(conn, email))
        .transpose()?;
    let address = place.location.address.clone().unwrap_or_default();
    Ok(models::NewPlace {
        id: place.id.as_str(),
        created_ms: place.created.at.as_millis(),
        created_by,
        title: place.title.clone(),
        description: place.description.clone(),
        lat: place.location.pos.lat().to_deg(),
        lng: place.location.pos.lng().to_deg(),
        street: address.street,
        zip: address.zip,
        city: address.city,
        country: address.country,
        category_rowid,
        rating: place.rating.map(Into::into),
        rating_count: place.rating_count as i64,
        image_url: place.image_url.clone(),
        archived_at: place.archived_at.map(Timestamp::as_secs),
    })
}

fn create_place(conn: &mut SqliteConnection, place: &Place) -> Result<()> {
    let model = new_place_model(conn, place)?;
    match diesel::insert_into(schema::places::table)
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

fn update_place(conn: &mut SqliteConnection, place: &Place) -> Result<()> {
    use schema::places::dsl;
    let model = new_place_model(conn, place)?;
    let count = diesel::update(dsl::places.filter(dsl::id.eq(place.id.as_str())))
        .set(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_place(conn: &mut SqliteConnection, id: &str) -> Result<Place> {
    use schema::{categories::dsl as c_dsl, places::dsl as p_dsl, users::dsl as u_dsl};
    p_dsl::places
        .inner_join(schema::categories::table)
        .left_join(schema::users::table)
        .select((
            p_dsl::rowid,
            p_dsl::id,
            p_dsl::created_ms,
            p_dsl::title,
            p_dsl::description,
            p_dsl::lat,
            p_dsl::lng,
            p_dsl::street,
            p_dsl::zip,
            p_dsl::city,
            p_dsl::country,
            p_dsl::rating,
            p_dsl::rating_count,
            p_dsl::image_url,
            p_dsl::archived_at,
            c_dsl::id,
            u_dsl::email.nullable(),
        ))
        .filter(p_dsl::id.eq(id))
        .first::<models::JoinedPlace>(conn)
        .map_err(from_diesel_err)
        .and_then(load_place)
}

fn get_places(conn: &mut SqliteConnection, ids: &[&str]) -> Result<Vec<Place>> {
    use schema::{categories::dsl as c_dsl, places::dsl as p_dsl, users::dsl as u_dsl};
    p_dsl::places
        .inner_join(schema::categories::table)
        .left_join(schema::users::table)
        .select((
            p_dsl::rowid,
            p_dsl::id,
            p_dsl::created_ms,
            p_dsl::title,
            p_dsl::description,
            p_dsl::lat,
            p_dsl::lng,
            p_dsl::street,
            p_dsl::zip,
            p_dsl::city,
            p_dsl::country,
            p_dsl::rating,
            p_dsl::rating_count,
            p_dsl::image_url,
            p_dsl::archived_at,
            c_dsl::id,
            u_dsl::email.nullable(),
        ))
        .filter(p_dsl::id.eq_any(ids))
        .load::<models::JoinedPlace>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_place)
        .collect()
}

fn count_places(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::places::dsl;
    Ok(dsl::places
        .select(diesel::dsl::count(dsl::rowid))
        .filter(dsl::archived_at.is_null())
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn search_places(
    conn: &mut SqliteConnection,
    params: &PlaceSearchParams,
    pagination: &Pagination,
) -> Result<Vec<Place>> {
    use schema::{categories::dsl as c_dsl, places::dsl as p_dsl, users::dsl as u_dsl};
    let mut query = p_dsl::places
        .inner_join(schema::categories::table)
        .left_join(schema::users::table)
        .select((
            p_dsl::rowid,
            p_dsl::id,
            p_dsl::created_ms,
            p_dsl::title,
            p_dsl::description,
            p_dsl::lat,
            p_dsl::lng,
            p_dsl::street,
            p_dsl::zip,
            p_dsl::city,
            p_dsl::country,
            p_dsl::rating,
            p_dsl::rating_count,
            p_dsl::image_url,
            p_dsl::archived_at,
            c_dsl::id,
            u_dsl::email.nullable(),
        ))
        .order_by(p_dsl::title.asc())
        .into_boxed();
    if !params.include_archived {
        query = query.filter(p_dsl::archived_at.is_null());
    }
    if let Some(text) = params.text.as_deref().filter(|text| !text.is_empty()) {
        let pattern = format!("%{text}%");
        query = query.filter(
            p_dsl::title
                .like(pattern.clone())
                .or(p_dsl::description.like(pattern)),
        );
    }
    if !params.categories.is_empty() {
        let ids: Vec<_> = params.categories.iter().map(Id::as_str).collect();
        query = query.filter(c_dsl::id.eq_any(ids));
    }
    if let Some(offset) = pagination.offset {
        query = query.offset(offset as i64);
    }
    if let Some(limit) = pagination.limit {
        query = query.limit(limit as i64);
    }
    query
        .load::<models::JoinedPlace>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_place)
        .collect()
}

fn find_places_near(
    conn: &mut SqliteConnection,
    center: MapPoint,
    radius: Distance,
    categories: &[Id],
    pagination: &Pagination,
) -> Result<Vec<(Place, Distance)>> {
    use schema::{categories::dsl as c_dsl, places::dsl as p_dsl, users::dsl as u_dsl};
    // Cheap bounding box prefilter in SQL, exact haversine
    // refinement on the candidates.
    let bbox = MapBbox::centered_around(center, radius);
    let sw = bbox.southwest();
    let ne = bbox.northeast();
    let mut query = p_dsl::places
        .inner_join(schema::categories::table)
        .left_join(schema::users::table)
        .select((
            p_dsl::rowid,
            p_dsl::id,
            p_dsl::created_ms,
            p_dsl::title,
            p_dsl::description,
            p_dsl::lat,
            p_dsl::lng,
            p_dsl::street,
            p_dsl::zip,
            p_dsl::city,
            p_dsl::country,
            p_dsl::rating,
            p_dsl::rating_count,
            p_dsl::image_url,
            p_dsl::archived_at,
            c_dsl::id,
            u_dsl::email.nullable(),
        ))
        .filter(p_dsl::archived_at.is_null())
        .filter(p_dsl::lat.between(sw.lat().to_deg(), ne.lat().to_deg()))
        .filter(p_dsl::lng.between(sw.lng().to_deg(), ne.lng().to_deg()))
        .into_boxed();
    if !categories.is_empty() {
        let ids: Vec<_> = categories.iter().map(Id::as_str).collect();
        query = query.filter(c_dsl::id.eq_any(ids));
    }
    let candidates = query
        .load::<models::JoinedPlace>(conn)
        .map_err(from_diesel_err)?;
    let mut hits = Vec::with_capacity(candidates.len());
    for model in candidates {
        let place = load_place(model)?;
        let distance = center.distance(place.location.pos);
        if distance <= radius {
            hits.push((place, distance));
        }
    }
    hits.sort_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let offset = pagination.offset.unwrap_or(0) as usize;
    let hits = hits.into_iter().skip(offset);
    Ok(match pagination.limit {
        Some(limit) => hits.take(limit as usize).collect(),
        None => hits.collect(),
    })
}
