#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// Timestamps with the `_at` postfix are stored as unix timestamps
// in seconds, the `_ms` postfix marks milliseconds.

use super::schema::*;

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = users)]
#[diesel(treat_none_as_null = true)]
pub struct NewUser<'a> {
    pub email: &'a str,
    pub email_confirmed: bool,
    pub password: String,
    pub display_name: Option<&'a str>,
    pub role: i16,
    pub banned_at: Option<i64>,
}

#[derive(Queryable)]
pub struct UserEntity {
    pub id: i64,
    pub email: String,
    pub email_confirmed: bool,
    pub password: String,
    pub display_name: Option<String>,
    pub role: i16,
    pub banned_at: Option<i64>,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = user_tokens)]
pub struct NewUserToken {
    pub user_id: i64,
    pub nonce: String,
    pub expires_at: i64,
}

#[derive(Queryable)]
pub struct UserTokenEntity {
    pub user_id: i64,
    pub nonce: String,
    pub expires_at: i64,
    // Joined columns
    pub user_email: String,
}

#[derive(Insertable)]
#[diesel(table_name = external_identities)]
pub struct NewExternalIdentity<'a> {
    pub user_id: i64,
    pub provider: &'a str,
    pub external_id: &'a str,
    pub linked_at: i64,
}

#[derive(Queryable)]
pub struct ExternalIdentityEntity {
    pub provider: String,
    pub external_id: String,
    pub linked_at: i64,
    // Joined columns
    pub user_email: String,
}

#[derive(Insertable)]
#[diesel(table_name = categories)]
pub struct NewCategory<'a> {
    pub id: &'a str,
    pub slug: &'a str,
    pub icon: Option<&'a str>,
}

#[derive(Queryable)]
pub struct CategoryEntity {
    pub rowid: i64,
    pub id: String,
    pub slug: String,
    pub icon: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = category_translations)]
pub struct NewCategoryTranslation<'a> {
    pub category_rowid: i64,
    pub locale: &'a str,
    pub name: &'a str,
}

#[derive(Queryable)]
pub struct CategoryTranslationEntity {
    pub category_rowid: i64,
    pub locale: String,
    pub name: String,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = places)]
#[diesel(treat_none_as_null = true)]
pub struct NewPlace<'a> {
    pub id: &'a str,
    pub created_ms: i64,
    pub created_by: Option<i64>,
    pub title: String,
    pub description: String,
    pub lat: f64,
    pub lng: f64,
    pub street: Option<String>,
    pub zip: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub category_rowid: i64,
    pub rating: Option<f64>,
    pub rating_count: i64,
    pub image_url: Option<String>,
    pub archived_at: Option<i64>,
}

#[derive(Queryable)]
pub struct JoinedPlace {
    pub rowid: i64,
    pub id: String,
    pub created_ms: i64,
    pub title: String,
    pub description: String,
    pub lat: f64,
    pub lng: f64,
    pub street: Option<String>,
    pub zip: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub rating: Option<f64>,
    pub rating_count: i64,
    pub image_url: Option<String>,
    pub archived_at: Option<i64>,
    // Joined columns
    pub category_id: String,
    pub created_by_email: Option<String>,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = trips)]
#[diesel(treat_none_as_null = true)]
pub struct NewTrip<'a> {
    pub id: &'a str,
    pub owner_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub starts_on: String,
    pub ends_on: String,
    pub lat: f64,
    pub lng: f64,
    pub created_at: i64,
    pub archived_at: Option<i64>,
}

#[derive(Queryable)]
pub struct JoinedTrip {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub starts_on: String,
    pub ends_on: String,
    pub lat: f64,
    pub lng: f64,
    pub created_at: i64,
    pub archived_at: Option<i64>,
    // Joined columns
    pub owner_email: String,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = trip_members)]
#[diesel(treat_none_as_null = true)]
pub struct NewTripMember {
    pub trip_rowid: i64,
    pub user_id: i64,
    pub role: i16,
    pub status: i16,
    pub invited_at: i64,
    pub responded_at: Option<i64>,
}

#[derive(Queryable)]
pub struct JoinedTripMember {
    pub role: i16,
    pub status: i16,
    pub invited_at: i64,
    pub responded_at: Option<i64>,
    // Joined columns
    pub member_email: String,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = trip_places)]
#[diesel(treat_none_as_null = true)]
pub struct NewTripPlace {
    pub trip_rowid: i64,
    pub place_rowid: i64,
    pub status: i16,
    pub is_fixed: bool,
    pub day: Option<i32>,
    pub order_index: Option<i32>,
    pub note: Option<String>,
    pub proposed_by: i64,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct JoinedTripPlace {
    pub status: i16,
    pub is_fixed: bool,
    pub day: Option<i32>,
    pub order_index: Option<i32>,
    pub note: Option<String>,
    pub created_at: i64,
    // Joined columns
    pub place_id: String,
    pub proposed_by_email: String,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = trip_place_votes)]
pub struct NewPlaceVote {
    pub trip_rowid: i64,
    pub place_rowid: i64,
    pub user_id: i64,
    pub score: i16,
    pub cast_at: i64,
}

#[derive(Queryable)]
pub struct JoinedPlaceVote {
    pub score: i16,
    pub cast_at: i64,
    // Joined columns
    pub place_id: String,
    pub voter_email: String,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = user_preferences)]
pub struct NewUserPreference {
    pub user_id: i64,
    pub category_rowid: i64,
    pub score: i16,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct JoinedUserPreference {
    pub score: i16,
    pub updated_at: i64,
    // Joined columns
    pub user_email: String,
    pub category_id: String,
}

#[derive(Insertable)]
#[diesel(table_name = trip_itineraries)]
pub struct NewTripItinerary {
    pub trip_rowid: i64,
    pub generated_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = trip_itinerary_items)]
pub struct NewTripItineraryItem {
    pub trip_rowid: i64,
    pub day: i32,
    pub order_index: i32,
    pub place_rowid: i64,
    pub is_fixed: bool,
}

#[derive(Queryable)]
pub struct JoinedItineraryItem {
    pub day: i32,
    pub order_index: i32,
    pub is_fixed: bool,
    // Joined columns
    pub place_id: String,
}

// `created_by` keeps the e-mail address verbatim instead of a user
// reference: audit entries must survive the deletion of the account
// they record, e.g. as proof of an OAuth data-deletion request.
#[derive(Insertable)]
#[diesel(table_name = audit_log)]
pub struct NewAuditLogEntry<'a> {
    pub id: &'a str,
    pub at_ms: i64,
    pub created_by: Option<&'a str>,
    pub action: &'a str,
    pub context: Option<&'a str>,
    pub comment: Option<&'a str>,
}

#[derive(Queryable)]
pub struct AuditLogEntity {
    pub id: String,
    pub at_ms: i64,
    pub created_by: Option<String>,
    pub action: String,
    pub context: Option<String>,
    pub comment: Option<String>,
}
