// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use std::io;

use thiserror::Error;

use crate::entities::{
    activity::AuditLogEntry,
    category::Category,
    email::EmailAddress,
    geo::{Distance, MapPoint},
    id::Id,
    identity::{ExternalIdentity, OAuthProvider},
    itinerary::TripItinerary,
    nonce::{EmailNonce, UserToken},
    place::Place,
    preference::UserPreference,
    time::{Timestamp, TimestampMs},
    trip::{Trip, TripMembership},
    trip_place::TripPlace,
    user::User,
    vote::PlaceVote,
};

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pagination {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;
    fn update_user(&self, user: &User) -> Result<()>;
    fn delete_user_by_email(&self, email: &EmailAddress) -> Result<()>;

    fn all_users(&self) -> Result<Vec<User>>;
    fn count_users(&self) -> Result<usize>;

    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User>;
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>>;
}

pub trait UserTokenRepo {
    fn replace_user_token(&self, user_token: UserToken) -> Result<EmailNonce>;

    fn consume_user_token(&self, email_nonce: &EmailNonce) -> Result<UserToken>;

    fn delete_expired_user_tokens(&self, expired_before: Timestamp) -> Result<usize>;

    fn get_user_token_by_email(&self, email: &EmailAddress) -> Result<UserToken>;
}

pub trait IdentityRepo {
    fn create_identity(&self, identity: &ExternalIdentity) -> Result<()>;

    fn try_get_identity(
        &self,
        provider: OAuthProvider,
        external_id: &str,
    ) -> Result<Option<ExternalIdentity>>;
    fn get_identities_by_email(&self, email: &EmailAddress) -> Result<Vec<ExternalIdentity>>;

    // Returns the number of removed links.
    fn delete_identities(&self, provider: OAuthProvider, external_id: &str) -> Result<usize>;
    fn delete_identities_by_email(&self, email: &EmailAddress) -> Result<usize>;
}

pub trait CategoryRepo {
    fn create_category(&self, category: &Category) -> Result<()>;

    fn all_categories(&self) -> Result<Vec<Category>>;
    fn get_category(&self, id: &str) -> Result<Category>;
    fn try_get_category_by_slug(&self, slug: &str) -> Result<Option<Category>>;
}

#[derive(Clone, Debug, Default)]
pub struct PlaceSearchParams {
    pub text: Option<String>,
    // An empty list matches all categories.
    pub categories: Vec<Id>,
    pub include_archived: bool,
}

pub trait PlaceRepo {
    fn create_place(&self, place: &Place) -> Result<()>;
    fn update_place(&self, place: &Place) -> Result<()>;

    fn get_place(&self, id: &str) -> Result<Place>;
    fn get_places(&self, ids: &[&str]) -> Result<Vec<Place>>;
    fn count_places(&self) -> Result<usize>;

    fn search_places(
        &self,
        params: &PlaceSearchParams,
        pagination: &Pagination,
    ) -> Result<Vec<Place>>;

    // Unarchived places within the radius around the center,
    // closest first. An empty category list matches all categories.
    fn find_places_near(
        &self,
        center: MapPoint,
        radius: Distance,
        categories: &[Id],
        pagination: &Pagination,
    ) -> Result<Vec<(Place, Distance)>>;
}

pub trait TripRepo {
    fn create_trip(&self, trip: &Trip) -> Result<()>;
    fn update_trip(&self, trip: &Trip) -> Result<()>;

    fn get_trip(&self, id: &str) -> Result<Trip>;
    fn count_trips(&self) -> Result<usize>;

    // All trips the user owns or is invited to, most recently
    // created first. Declined invitations are not listed.
    fn trips_of_user(&self, user: &EmailAddress) -> Result<Vec<Trip>>;
}

pub trait MembershipRepo {
    fn create_membership(&self, membership: &TripMembership) -> Result<()>;
    fn update_membership(&self, membership: &TripMembership) -> Result<()>;
    fn delete_membership(&self, trip: &Id, member: &EmailAddress) -> Result<()>;

    fn get_membership(&self, trip: &Id, member: &EmailAddress) -> Result<TripMembership>;
    fn try_get_membership(
        &self,
        trip: &Id,
        member: &EmailAddress,
    ) -> Result<Option<TripMembership>>;
    fn memberships_of_trip(&self, trip: &Id) -> Result<Vec<TripMembership>>;
}

// One day/order slot of a bulk reorder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TripPlaceSlot {
    pub place: Id,
    pub day: Option<u32>,
    pub order_index: Option<u32>,
}

pub trait TripPlaceRepo {
    fn create_trip_place(&self, trip_place: &TripPlace) -> Result<()>;
    fn update_trip_place(&self, trip_place: &TripPlace) -> Result<()>;
    fn delete_trip_place(&self, trip: &Id, place: &Id) -> Result<()>;

    fn get_trip_place(&self, trip: &Id, place: &Id) -> Result<TripPlace>;
    fn try_get_trip_place(&self, trip: &Id, place: &Id) -> Result<Option<TripPlace>>;
    fn trip_places(&self, trip: &Id) -> Result<Vec<TripPlace>>;
    fn place_ids_of_trip(&self, trip: &Id) -> Result<Vec<Id>>;

    // Applies the day/order slots in one pass. Fails with `NotFound`
    // if any place is not attached to the trip.
    fn reorder_trip_places(&self, trip: &Id, slots: &[TripPlaceSlot]) -> Result<usize>;
}

pub trait VoteRepo {
    // Replaces the voter's previous score for the place, if any.
    fn upsert_vote(&self, vote: &PlaceVote) -> Result<()>;
    // Removes all votes for the place, e.g. when it is detached
    // from the trip. Returns the number of removed votes.
    fn delete_votes_for_place(&self, trip: &Id, place: &Id) -> Result<usize>;

    fn votes_of_trip(&self, trip: &Id) -> Result<Vec<PlaceVote>>;
    fn votes_for_place(&self, trip: &Id, place: &Id) -> Result<Vec<PlaceVote>>;
}

pub trait PreferenceRepo {
    // Replaces the user's previous score for the category, if any.
    fn upsert_preference(&self, preference: &UserPreference) -> Result<()>;

    fn preferences_of_user(&self, user: &EmailAddress) -> Result<Vec<UserPreference>>;
    fn preferences_of_users(&self, users: &[EmailAddress]) -> Result<Vec<UserPreference>>;
}

pub trait ItineraryRepo {
    // Overwrites the cached itinerary of the trip, if any.
    fn save_itinerary(&self, itinerary: &TripItinerary) -> Result<()>;

    fn try_get_itinerary(&self, trip: &Id) -> Result<Option<TripItinerary>>;
    // Removing a missing itinerary is not an error.
    fn delete_itinerary(&self, trip: &Id) -> Result<()>;
}

#[derive(Clone, Debug, Default)]
pub struct AuditLogQuery {
    pub since: Option<TimestampMs>,
    pub until: Option<TimestampMs>,
    pub action_prefix: Option<String>,
    pub by: Option<EmailAddress>,
}

pub trait AuditLogRepo {
    fn log_audit_entry(&self, entry: &AuditLogEntry) -> Result<()>;

    // Most recent entries first.
    fn audit_log_entries(
        &self,
        query: &AuditLogQuery,
        pagination: &Pagination,
    ) -> Result<Vec<AuditLogEntry>>;
    fn try_get_audit_log_entry(&self, id: &Id) -> Result<Option<AuditLogEntry>>;
    fn count_audit_log_entries(&self) -> Result<usize>;
}
