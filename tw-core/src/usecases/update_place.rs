use super::prelude::*;
use crate::{
    usecases,
    util::validate::{AutoCorrect, Validate},
};

/// Full replacement of the catalog fields, admin only.
#[derive(Debug, Clone)]
pub struct UpdatePlace {
    pub title: String,
    pub description: String,
    pub lat: f64,
    pub lng: f64,
    pub category: Id,
    pub address: Option<Address>,
    pub rating: Option<f64>,
    pub rating_count: u64,
    pub image_url: Option<String>,
}

pub fn update_place<D>(
    db: &D,
    account: &EmailAddress,
    place_id: &Id,
    u: UpdatePlace,
) -> Result<Place>
where
    D: UserRepo + CategoryRepo + PlaceRepo,
{
    usecases::authorize_user_by_email(db, account, Role::Admin)?;
    let mut place = db.get_place(place_id.as_str())?;
    if place.is_archived() {
        return Err(Error::PlaceArchived);
    }
    let UpdatePlace {
        title,
        description,
        lat,
        lng,
        category,
        address,
        rating,
        rating_count,
        image_url,
    } = u;
    let pos = MapPoint::try_from_lat_lng_deg(lat, lng).map_err(|_| Error::InvalidPosition)?;
    db.get_category(category.as_str())?;
    place.title = title;
    place.description = description;
    place.location = Location { pos, address };
    place.category = category;
    place.rating = rating.map(ExternalRating::from);
    place.rating_count = rating_count;
    place.image_url = image_url;
    let place = place.auto_correct();
    place.validate()?;
    db.update_place(&place)?;
    log::info!("Updated place {} ({})", place.id, place.title);
    Ok(place)
}
