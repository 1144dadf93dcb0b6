pub mod authorization;
pub mod db;
pub mod gateways;
pub mod itinerary;
pub mod recommend;
pub mod repositories;
pub mod usecases;
pub mod util;
pub mod voting;

pub use tw_entities as entities;

pub use self::repositories::Error as RepoError;
