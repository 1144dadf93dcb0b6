use super::*;

#[get("/preferences")]
pub fn get_preferences(
    db: sqlite::Connections,
    account: Account,
) -> Result<Vec<json::Preference>> {
    let prefs = usecases::get_preferences(&db.shared()?, account.email())?;
    Ok(Json(prefs.into_iter().map(Into::into).collect()))
}

#[put("/preferences", format = "application/json", data = "<prefs>")]
pub fn put_preferences(
    db: sqlite::Connections,
    account: Account,
    prefs: JsonResult<Vec<json::NewPreference>>,
) -> Result<Vec<json::Preference>> {
    let prefs = prefs?
        .into_inner()
        .into_iter()
        .map(from_json::new_preference)
        .collect();
    let stored = flows::update_preferences(&db, account.email(), prefs)?;
    Ok(Json(stored.into_iter().map(Into::into).collect()))
}
