use super::*;

#[get("/trips/<id>/places")]
pub fn get_trip_places(
    db: sqlite::Connections,
    account: Account,
    id: String,
) -> Result<Vec<json::TripPlace>> {
    let details = usecases::list_trip_places(&db.shared()?, account.email(), &Id::from(id))?;
    Ok(Json(details.into_iter().map(to_json::trip_place).collect()))
}

#[post("/trips/<id>/places", format = "application/json", data = "<new_trip_place>")]
pub fn post_trip_place(
    db: sqlite::Connections,
    notify: &State<Notify>,
    account: Account,
    id: String,
    new_trip_place: JsonResult<json::NewTripPlace>,
) -> Result<json::TripPlace> {
    let new_trip_place = from_json::new_trip_place(new_trip_place?.into_inner());
    let trip_place =
        flows::add_trip_place(&db, &*notify.0, account.email(), &Id::from(id), new_trip_place)?;
    let place = usecases::get_place(&db.shared()?, &trip_place.place)?;
    Ok(Json(to_json::trip_place(usecases::TripPlaceDetails {
        trip_place,
        place,
    })))
}

#[put("/trips/<id>/places", format = "application/json", data = "<slots>")]
pub fn put_trip_places(
    db: sqlite::Connections,
    account: Account,
    id: String,
    slots: JsonResult<Vec<json::TripPlaceSlot>>,
) -> Result<json::ResultCount> {
    let slots: Vec<_> = slots?
        .into_inner()
        .into_iter()
        .map(from_json::trip_place_slot)
        .collect();
    let count = flows::reorder_trip_places(&db, account.email(), &Id::from(id), &slots)?;
    Ok(Json(json::ResultCount {
        count: count as u64,
    }))
}

#[put("/trips/<trip_id>/places/<place_id>", format = "application/json", data = "<update>")]
pub fn put_trip_place(
    db: sqlite::Connections,
    account: Account,
    trip_id: String,
    place_id: String,
    update: JsonResult<json::UpdateTripPlace>,
) -> Result<json::TripPlace> {
    let update = from_json::update_trip_place(update?.into_inner());
    let trip_place = flows::update_trip_place(
        &db,
        account.email(),
        &Id::from(trip_id),
        &Id::from(place_id),
        update,
    )?;
    let place = usecases::get_place(&db.shared()?, &trip_place.place)?;
    Ok(Json(to_json::trip_place(usecases::TripPlaceDetails {
        trip_place,
        place,
    })))
}

#[delete("/trips/<trip_id>/places/<place_id>")]
pub fn delete_trip_place(
    db: sqlite::Connections,
    account: Account,
    trip_id: String,
    place_id: String,
) -> Result<()> {
    flows::remove_trip_place(&db, account.email(), &Id::from(trip_id), &Id::from(place_id))?;
    Ok(Json(()))
}

#[post("/trips/<trip_id>/places/<place_id>/vote", format = "application/json", data = "<vote>")]
pub fn post_vote(
    db: sqlite::Connections,
    account: Account,
    trip_id: String,
    place_id: String,
    vote: JsonResult<json::NewVote>,
) -> Result<()> {
    let score = vote?.into_inner().score;
    flows::cast_vote(&db, account.email(), &Id::from(trip_id), &Id::from(place_id), score)?;
    Ok(Json(()))
}

#[get("/trips/<id>/votes")]
pub fn get_votes(
    db: sqlite::Connections,
    account: Account,
    id: String,
) -> Result<Vec<json::PlaceVoteSummary>> {
    let summaries = usecases::vote_summary(&db.shared()?, account.email(), &Id::from(id))?;
    Ok(Json(
        summaries.into_iter().map(to_json::vote_summary).collect(),
    ))
}
