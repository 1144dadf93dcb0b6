use thiserror::Error;

use crate::entities::{
    address::Address,
    geo::MapBbox,
    place::{Location, Place},
    trip::Trip,
};

pub use fast_chemail::is_valid_email;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

pub trait AutoCorrect {
    fn auto_correct(self) -> Self;
}

pub fn is_valid_bbox(bbox: &MapBbox) -> bool {
    bbox.is_valid() && !bbox.is_empty()
}

#[derive(Debug, Error)]
pub enum TripInvalidation {
    #[error("Invalid title")]
    Title,
    #[error("The end date is before the start date")]
    EndDateBeforeStart,
    #[error("Invalid position")]
    Position,
}

impl Validate for Trip {
    type Error = TripInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.title.trim().is_empty() {
            return Err(Self::Error::Title);
        }
        if self.ends_on < self.starts_on {
            return Err(Self::Error::EndDateBeforeStart);
        }
        if !self.start_pos.is_valid() {
            return Err(Self::Error::Position);
        }
        Ok(())
    }
}

impl AutoCorrect for Trip {
    fn auto_correct(mut self) -> Self {
        self.description = self.description.filter(|x| !x.is_empty());
        self
    }
}

#[derive(Debug, Error)]
pub enum PlaceInvalidation {
    #[error("Invalid title")]
    Title,
    #[error("Invalid position")]
    Position,
    #[error("External rating out of range")]
    Rating,
}

impl Validate for Place {
    type Error = PlaceInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.title.trim().is_empty() {
            return Err(Self::Error::Title);
        }
        if !self.location.pos.is_valid() {
            return Err(Self::Error::Position);
        }
        if let Some(rating) = self.rating {
            if !rating.is_valid() {
                return Err(Self::Error::Rating);
            }
        }
        Ok(())
    }
}

impl AutoCorrect for Place {
    fn auto_correct(mut self) -> Self {
        self.description = self.description.trim().to_string();
        self.image_url = self.image_url.filter(|x| !x.is_empty());
        self.location = self.location.auto_correct();
        self
    }
}

impl AutoCorrect for Location {
    fn auto_correct(mut self) -> Self {
        self.address = self
            .address
            .map(AutoCorrect::auto_correct)
            .filter(|a| !a.is_empty());
        self
    }
}

impl AutoCorrect for Address {
    fn auto_correct(mut self) -> Self {
        self.street = self.street.filter(|x| !x.is_empty());
        self.zip = self.zip.filter(|x| !x.is_empty());
        self.city = self.city.filter(|x| !x.is_empty());
        self.country = self.country.filter(|x| !x.is_empty());
        self
    }
}
