use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;

use tw_application::prelude as flows;
use tw_core::{
    entities::{address::Address, category::Category, email::EmailAddress, id::Id},
    repositories::CategoryRepo as _,
    usecases,
};
use tw_db_sqlite::Connections;

/// One place of the import file, which holds a JSON array of these.
///
/// `category` is a slug; `description`, the address fields, `rating`,
/// `rating_count` and `image_url` are optional.
#[derive(Debug, Deserialize)]
struct ImportedPlace {
    title: String,
    #[serde(default)]
    description: String,
    lat: f64,
    lng: f64,
    category: String,
    street: Option<String>,
    zip: Option<String>,
    city: Option<String>,
    country: Option<String>,
    rating: Option<f64>,
    #[serde(default)]
    rating_count: u64,
    image_url: Option<String>,
}

pub fn import_places_from_file(
    connections: &Connections,
    path: &Path,
    account: &EmailAddress,
) -> Result<usize> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let places: Vec<ImportedPlace> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    debug!("Parsed {} places from {}", places.len(), path.display());

    let count = places.len();
    for place in places {
        let category = resolve_category(connections, &place.category)?;
        let address = Address {
            street: place.street,
            zip: place.zip,
            city: place.city,
            country: place.country,
        };
        let new_place = usecases::NewPlace {
            title: place.title,
            description: place.description,
            lat: place.lat,
            lng: place.lng,
            category,
            address: (!address.is_empty()).then_some(address),
            rating: place.rating,
            rating_count: place.rating_count,
            image_url: place.image_url,
        };
        let place = flows::create_place(connections, account, new_place)?;
        debug!("Imported place {} ({})", place.id, place.title);
    }
    Ok(count)
}

/// Unknown slugs are created on the fly so that a fresh database can
/// be seeded from a single file.
fn resolve_category(connections: &Connections, slug: &str) -> Result<Id> {
    let db = connections.exclusive()?;
    if let Some(category) = db.try_get_category_by_slug(slug)? {
        return Ok(category.id);
    }
    let category = Category {
        id: Id::new(),
        slug: slug.to_string(),
        icon: None,
        translations: vec![],
    };
    db.create_category(&category)?;
    info!("Created category '{slug}'");
    Ok(category.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_an_import_file() {
        let json = r#"[
            {
                "title": "Miniatur Wunderland",
                "description": "Model railway museum",
                "lat": 53.5438,
                "lng": 9.9885,
                "category": "museum",
                "street": "Kehrwieder 2",
                "zip": "20457",
                "city": "Hamburg",
                "country": "DE",
                "rating": 4.8,
                "rating_count": 112000
            },
            {
                "title": "Planten un Blomen",
                "lat": 53.5625,
                "lng": 9.9822,
                "category": "park"
            }
        ]"#;
        let places: Vec<ImportedPlace> = serde_json::from_str(json).unwrap();
        assert_eq!(2, places.len());
        assert_eq!("Miniatur Wunderland", places[0].title);
        assert_eq!(Some(4.8), places[0].rating);
        assert!(places[1].description.is_empty());
        assert_eq!(0, places[1].rating_count);
        assert!(places[1].street.is_none());
    }
}
