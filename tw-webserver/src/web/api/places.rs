use super::*;

#[get("/places/<id>")]
pub fn get_place(db: sqlite::Connections, id: String) -> Result<json::Place> {
    let place = usecases::get_place(&db.shared()?, &Id::from(id))?;
    Ok(Json(place.into()))
}

#[get("/places/search?<text>&<categories>&<lat>&<lng>&<radius>&<limit>&<offset>")]
pub fn get_search(
    db: sqlite::Connections,
    text: Option<String>,
    categories: Option<String>,
    lat: Option<f64>,
    lng: Option<f64>,
    radius: Option<f64>,
    limit: Option<usize>,
    offset: Option<u64>,
) -> Result<Vec<json::Place>> {
    let center = match (lat, lng) {
        (Some(lat), Some(lng)) => Some(
            MapPoint::try_from_lat_lng_deg(lat, lng)
                .map_err(|_| usecases::Error::InvalidPosition)?,
        ),
        (None, None) => None,
        // A single coordinate is no position.
        _ => return Err(usecases::Error::InvalidPosition.into()),
    };
    let categories = categories
        .map(|csv| {
            csv.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(Id::from)
                .collect()
        })
        .unwrap_or_default();
    let req = usecases::PlaceSearchRequest {
        text,
        categories,
        center,
        radius: radius.map(Distance::from_meters),
        limit,
        offset,
    };
    let places = usecases::search_places(&db.shared()?, req)?;
    Ok(Json(places.into_iter().map(Into::into).collect()))
}

#[post("/places", format = "application/json", data = "<new_place>")]
pub fn post_place(
    db: sqlite::Connections,
    account: Account,
    new_place: JsonResult<json::NewPlace>,
) -> Result<json::Place> {
    let new_place = from_json::new_place(new_place?.into_inner());
    let place = flows::create_place(&db, account.email(), new_place)?;
    Ok(Json(place.into()))
}

#[put("/places/<id>", format = "application/json", data = "<update>")]
pub fn put_place(
    db: sqlite::Connections,
    account: Account,
    id: String,
    update: JsonResult<json::UpdatePlace>,
) -> Result<json::Place> {
    let update = from_json::update_place(update?.into_inner());
    let place = flows::update_place(&db, account.email(), &Id::from(id), update)?;
    Ok(Json(place.into()))
}

#[post("/places/<id>/archive")]
pub fn post_place_archive(db: sqlite::Connections, account: Account, id: String) -> Result<()> {
    flows::archive_place(&db, account.email(), &Id::from(id))?;
    Ok(Json(()))
}
