use super::prelude::*;
use crate::recommend;

const DEFAULT_LIMIT: usize = 20;
const MAX_LIMIT: usize = 100;

#[derive(Debug, Clone, Default)]
pub struct PlaceSearchRequest {
    pub text: Option<String>,
    pub categories: Vec<Id>,
    pub center: Option<MapPoint>,
    pub radius: Option<Distance>,
    pub limit: Option<usize>,
    pub offset: Option<u64>,
}

/// Searches the place catalog.
///
/// With a center the search runs as a radius query, closest places
/// first, and the text only refines that result. Without a center a
/// radius is meaningless and rejected.
pub fn search_places<R: PlaceRepo>(repo: &R, req: PlaceSearchRequest) -> Result<Vec<Place>> {
    let PlaceSearchRequest {
        text,
        categories,
        center,
        radius,
        limit,
        offset,
    } = req;
    let limit = limit.unwrap_or(DEFAULT_LIMIT);
    if limit < 1 || limit > MAX_LIMIT {
        return Err(Error::InvalidLimit);
    }
    let pagination = Pagination {
        offset,
        limit: Some(limit as u64),
    };
    let Some(center) = center else {
        if radius.is_some() {
            return Err(Error::InvalidRadius);
        }
        let params = PlaceSearchParams {
            text,
            categories,
            include_archived: false,
        };
        return Ok(repo.search_places(&params, &pagination)?);
    };
    let radius = radius.unwrap_or(recommend::DEFAULT_RADIUS);
    if !radius.is_valid() || radius.to_meters() <= 0.0 || radius > recommend::MAX_RADIUS {
        return Err(Error::InvalidRadius);
    }
    let text = text.map(|t| t.trim().to_lowercase()).filter(|t| !t.is_empty());
    let places = repo
        .find_places_near(center, radius, &categories, &pagination)?
        .into_iter()
        .map(|(place, _)| place)
        .filter(|place| match &text {
            Some(t) => {
                place.title.to_lowercase().contains(t)
                    || place.description.to_lowercase().contains(t)
            }
            None => true,
        })
        .collect();
    Ok(places)
}
