use super::prelude::*;

pub fn get_place<R: PlaceRepo>(repo: &R, id: &Id) -> Result<Place> {
    Ok(repo.get_place(id.as_str())?)
}
