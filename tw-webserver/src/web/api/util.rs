use super::*;

#[get("/version")]
pub fn get_version(version: &State<Version>) -> &'static str {
    version.0
}

#[get("/categories")]
pub fn get_categories(db: sqlite::Connections) -> Result<Vec<json::Category>> {
    let categories = usecases::all_categories(&db.shared()?)?;
    Ok(Json(categories.into_iter().map(Into::into).collect()))
}
