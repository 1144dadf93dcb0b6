#[macro_use]
extern crate log;

mod add_trip_place;
mod archive_place;
mod archive_trip;
mod ban_user;
mod cast_vote;
mod change_user_role;
mod create_place;
mod create_trip;
mod data_deletion;
mod delete_user;
mod get_itinerary;
mod invite_member;
mod oauth_login;
mod register_user;
mod remove_member;
mod remove_trip_place;
mod reorder_trip_places;
mod reset_password;
mod respond_to_invitation;
mod update_place;
mod update_preferences;
mod update_trip;
mod update_trip_place;

pub mod prelude {
    pub use super::{
        add_trip_place::*, archive_place::*, archive_trip::*, ban_user::*, cast_vote::*,
        change_user_role::*, create_place::*, create_trip::*, data_deletion::*, delete_user::*,
        get_itinerary::*, invite_member::*, oauth_login::*, register_user::*, remove_member::*,
        remove_trip_place::*, reorder_trip_places::*, reset_password::*, respond_to_invitation::*,
        update_place::*, update_preferences::*, update_trip::*, update_trip_place::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use tw_core::{
    entities::{
        activity::*, email::*, id::*, identity::*, itinerary::*, nonce::*, password::*, place::*,
        preference::*, time::*, trip::*, trip_place::*, user::*, vote::*,
    },
    repositories::*,
    usecases,
};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use tw_db_sqlite::Connections;
}
