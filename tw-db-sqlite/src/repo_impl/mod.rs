// NOTE:
// Timestamps with the `_at` postfix are stored as unix timestamps
// in seconds, the `_ms` postfix marks milliseconds.

use anyhow::anyhow;
use diesel::{
    self,
    prelude::{Connection as DieselConnection, *},
    result::{DatabaseErrorKind, Error as DieselError},
};

use tw_core::{
    entities::{
        activity::*, address::Address, category::*, email::*, geo::*, id::Id, identity::*,
        itinerary::*, nonce::*, password::Password, place::*, preference::*, time::*, trip::*,
        trip_place::*, user::*, vote::*,
    },
    repositories::{self as repo, *},
};

use super::*;

mod audit_log;
mod category;
mod identity;
mod itinerary;
mod membership;
mod place;
mod preference;
mod trip;
mod trip_place;
mod user;
mod user_token;
mod vote;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        _ => repo::Error::Other(err.into()),
    }
}

fn resolve_user_id_by_email(conn: &mut SqliteConnection, email: &EmailAddress) -> Result<i64> {
    use schema::users::dsl;
    dsl::users
        .select(dsl::id)
        .filter(dsl::email.eq(email.as_str()))
        .first(conn)
        .map_err(|e| {
            log::warn!("Failed to resolve user by e-mail '{}': {}", email.as_str(), e);
            e
        })
        .map_err(from_diesel_err)
}

fn resolve_trip_rowid(conn: &mut SqliteConnection, id: &Id) -> Result<i64> {
    use schema::trips::dsl;
    schema::trips::table
        .select(dsl::rowid)
        .filter(dsl::id.eq(id.as_str()))
        .first::<i64>(conn)
        .map_err(|e| {
            log::warn!("Failed to resolve trip id '{}': {}", id, e);
            e
        })
        .map_err(from_diesel_err)
}

fn resolve_place_rowid(conn: &mut SqliteConnection, id: &str) -> Result<i64> {
    use schema::places::dsl;
    schema::places::table
        .select(dsl::rowid)
        .filter(dsl::id.eq(id))
        .first::<i64>(conn)
        .map_err(|e| {
            log::warn!("Failed to resolve place id '{}': {}", id, e);
            e
        })
        .map_err(from_diesel_err)
}

fn resolve_category_rowid(conn: &mut SqliteConnection, id: &str) -> Result<i64> {
    use schema::categories::dsl;
    schema::categories::table
        .select(dsl::rowid)
        .filter(dsl::id.eq(id))
        .first::<i64>(conn)
        .map_err(|e| {
            log::warn!("Failed to resolve category id '{}': {}", id, e);
            e
        })
        .map_err(from_diesel_err)
}

fn load_email_by_user_id(conn: &mut SqliteConnection, user_id: i64) -> Result<Option<String>> {
    use schema::users::dsl;
    let email = schema::users::table
        .select(dsl::email)
        .filter(dsl::id.eq(&user_id))
        .first::<String>(conn)
        .optional()
        .map_err(from_diesel_err)?;
    if email.is_none() {
        // This should never happen
        log::warn!("Referential integrity violation: User with id = {user_id} not found");
    }
    Ok(email)
}

fn load_role(role: RolePrimitive) -> Result<Role> {
    Role::try_from(role).map_err(|_| anyhow!("Invalid user role: {role}").into())
}

fn load_member_role(role: MemberRolePrimitive) -> Result<MemberRole> {
    MemberRole::try_from(role).map_err(|_| anyhow!("Invalid member role: {role}").into())
}

fn load_membership_status(status: MembershipStatusPrimitive) -> Result<MembershipStatus> {
    MembershipStatus::try_from(status)
        .map_err(|_| anyhow!("Invalid membership status: {status}").into())
}

fn load_trip_place_status(status: TripPlaceStatusPrimitive) -> Result<TripPlaceStatus> {
    TripPlaceStatus::try_from(status)
        .map_err(|_| anyhow!("Invalid trip place status: {status}").into())
}

fn load_vote_score(score: i16) -> Result<VoteScore> {
    u8::try_from(score)
        .ok()
        .and_then(|score| VoteScore::try_from(score).ok())
        .ok_or_else(|| anyhow!("Invalid vote score: {score}").into())
}
