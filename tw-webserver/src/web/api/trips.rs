use super::*;

#[get("/trips")]
pub fn get_trips(db: sqlite::Connections, account: Account) -> Result<Vec<json::Trip>> {
    let trips = usecases::list_trips(&db.shared()?, account.email())?;
    Ok(Json(trips.into_iter().map(Into::into).collect()))
}

#[post("/trips", format = "application/json", data = "<new_trip>")]
pub fn post_trip(
    db: sqlite::Connections,
    account: Account,
    new_trip: JsonResult<json::NewTrip>,
) -> Result<json::Trip> {
    let new_trip = from_json::new_trip(new_trip?.into_inner());
    let trip = flows::create_trip(&db, account.email().clone(), new_trip)?;
    Ok(Json(trip.into()))
}

#[get("/trips/<id>")]
pub fn get_trip(db: sqlite::Connections, account: Account, id: String) -> Result<json::Trip> {
    let trip = usecases::get_trip(&db.shared()?, account.email(), &Id::from(id))?;
    Ok(Json(trip.into()))
}

#[put("/trips/<id>", format = "application/json", data = "<update>")]
pub fn put_trip(
    db: sqlite::Connections,
    account: Account,
    id: String,
    update: JsonResult<json::UpdateTrip>,
) -> Result<json::Trip> {
    let update = from_json::update_trip(update?.into_inner());
    let trip = flows::update_trip(&db, account.email(), &Id::from(id), update)?;
    Ok(Json(trip.into()))
}

#[delete("/trips/<id>")]
pub fn delete_trip(db: sqlite::Connections, account: Account, id: String) -> Result<()> {
    flows::archive_trip(&db, account.email(), &Id::from(id))?;
    Ok(Json(()))
}

#[get("/trips/<id>/recommendations?<radius>&<limit>")]
pub fn get_recommendations(
    db: sqlite::Connections,
    account: Account,
    id: String,
    radius: Option<f64>,
    limit: Option<usize>,
) -> Result<Vec<json::RecommendedPlace>> {
    let query = usecases::RecommendationQuery {
        radius: radius.map(Distance::from_meters),
        limit,
    };
    let recommended =
        usecases::recommend_places(&db.shared()?, account.email(), &Id::from(id), query)?;
    Ok(Json(
        recommended
            .into_iter()
            .map(to_json::recommended_place)
            .collect(),
    ))
}

#[get("/trips/<id>/itinerary")]
pub fn get_itinerary(
    db: sqlite::Connections,
    account: Account,
    id: String,
    cfg: &State<Cfg>,
) -> Result<json::TripItinerary> {
    let trip_id = Id::from(id);
    let itinerary = flows::get_itinerary(&db, account.email(), &trip_id, cfg.itinerary_ttl)?;
    // The itinerary stores day numbers, the calendar dates come from the trip.
    let trip = usecases::get_trip(&db.shared()?, account.email(), &trip_id)?;
    Ok(Json(to_json::itinerary(itinerary, &trip)))
}
