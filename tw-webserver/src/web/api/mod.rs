use std::{fmt::Display, result};

use rocket::{
    self, delete, get,
    http::{ContentType, Status},
    post, put,
    response::{self, Responder},
    routes,
    serde::json::{Error as JsonError, Json},
    Route, State,
};

use super::guards::*;
use crate::{
    adapters::{
        self,
        json::{self, from_json, to_json},
    },
    web::{jwt, sqlite, Cfg},
};
use tw_application::prelude as flows;
use tw_boundary::Error as JsonErrorResponse;
use tw_core::{
    entities::{email::*, geo::*, id::*, identity::*, nonce::*, password::*, time::*, user::*},
    repositories::{AuditLogQuery, Pagination},
    usecases,
};

mod admin;
mod auth;
mod error;
mod export;
mod members;
mod places;
mod preferences;
mod trip_places;
mod trips;
mod users;
mod util;

pub use self::error::Error as ApiError;

#[cfg(test)]
pub mod tests;

type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   users   --- //
        users::post_login,
        users::post_logout,
        users::post_user,
        users::confirm_email_address,
        users::post_request_password_reset,
        users::post_reset_password,
        users::get_current_user,
        users::delete_user,
        // ---   auth   --- //
        auth::post_oauth_login,
        auth::post_facebook_data_deletion,
        auth::get_facebook_data_deletion_status,
        // ---   places   --- //
        places::get_place,
        places::get_search,
        places::post_place,
        places::put_place,
        places::post_place_archive,
        // ---   trips   --- //
        trips::get_trips,
        trips::post_trip,
        trips::get_trip,
        trips::put_trip,
        trips::delete_trip,
        trips::get_recommendations,
        trips::get_itinerary,
        // ---   members   --- //
        members::get_members,
        members::post_member,
        members::post_invitation_response,
        members::delete_member,
        // ---   trip places   --- //
        trip_places::get_trip_places,
        trip_places::post_trip_place,
        trip_places::put_trip_places,
        trip_places::put_trip_place,
        trip_places::delete_trip_place,
        trip_places::post_vote,
        trip_places::get_votes,
        // ---   preferences   --- //
        preferences::get_preferences,
        preferences::put_preferences,
        // ---   admin   --- //
        admin::get_users,
        admin::post_user_role,
        admin::post_user_ban,
        admin::post_user_unban,
        admin::delete_user,
        admin::get_activities,
        // ---   export   --- //
        export::activities_csv_export,
        util::get_version,
        util::get_categories,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
