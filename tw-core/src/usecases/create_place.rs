use super::prelude::*;
use crate::{
    usecases,
    util::validate::{AutoCorrect, Validate},
};

#[derive(Debug, Clone)]
pub struct NewPlace {
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

/// Adds a place to the shared catalog.
///
/// Open to every confirmed account; curation happens through the
/// admin-only update and archive operations.
pub fn create_place<D>(db: &D, account: &EmailAddress, n: NewPlace) -> Result<Place>
where
    D: UserRepo + CategoryRepo + PlaceRepo,
{
    usecases::authorize_user_by_email(db, account, Role::User)?;
    let NewPlace {
        title,
        description,
        lat,
        lng,
        category,
        address,
        rating,
        rating_count,
        image_url,
    } = n;
    let pos = MapPoint::try_from_lat_lng_deg(lat, lng).map_err(|_| Error::InvalidPosition)?;
    db.get_category(category.as_str())?;
    let place = Place {
        id: Id::new(),
        created: Activity::now(Some(account.clone())),
        title,
        description,
        location: Location { pos, address },
        category,
        rating: rating.map(ExternalRating::from),
        rating_count,
        image_url,
        archived_at: None,
    };
    let place = place.auto_correct();
    place.validate()?;
    db.create_place(&place)?;
    log::info!("Created place {} ({})", place.id, place.title);
    Ok(place)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use crate::entities::builders::*;

    fn fixture(db: &MockDb) -> EmailAddress {
        let jo: EmailAddress = "jo@test.org".parse().unwrap();
        db.users
            .borrow_mut()
            .push(User::build().email(jo.as_str()).finish());
        db.categories.borrow_mut().push(Category {
            id: "museum".into(),
            slug: "museum".into(),
            icon: None,
            translations: vec![],
        });
        jo
    }

    fn new_place() -> NewPlace {
        NewPlace {
            title: "Miniatur Wunderland".into(),
            description: "  ".into(),
            lat: 53.5439,
            lng: 9.9886,
            category: "museum".into(),
            address: Some(Address::default()),
            rating: Some(4.8),
            rating_count: 120,
            image_url: None,
        }
    }

    #[test]
    fn create_a_catalog_place() {
        let db = MockDb::default();
        let jo = fixture(&db);
        let place = create_place(&db, &jo, new_place()).unwrap();
        assert_eq!(Some(jo), place.created.by);
        // Auto-correction drops the blank description and the
        // empty address.
        assert!(place.description.is_empty());
        assert_eq!(None, place.location.address);
        assert_eq!(1, db.places.borrow().len());
    }

    #[test]
    fn reject_invalid_coordinates() {
        let db = MockDb::default();
        let jo = fixture(&db);
        let n = NewPlace {
            lat: 123.0,
            ..new_place()
        };
        assert!(matches!(
            create_place(&db, &jo, n),
            Err(Error::InvalidPosition)
        ));
    }

    #[test]
    fn reject_out_of_range_ratings() {
        let db = MockDb::default();
        let jo = fixture(&db);
        let n = NewPlace {
            rating: Some(9.5),
            ..new_place()
        };
        assert!(matches!(create_place(&db, &jo, n), Err(Error::RatingValue)));
    }

    #[test]
    fn unconfirmed_accounts_cannot_contribute() {
        let db = MockDb::default();
        fixture(&db);
        let guest: EmailAddress = "guest@test.org".parse().unwrap();
        db.users.borrow_mut().push(
            User::build()
                .email(guest.as_str())
                .confirmed(false)
                .role(Role::Guest)
                .finish(),
        );
        assert!(matches!(
            create_place(&db, &guest, new_place()),
            Err(Error::Forbidden)
        ));
    }
}
