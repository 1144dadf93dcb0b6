mod activity_log;
mod add_trip_place;
mod archive_place;
mod archive_trip;
mod authorize;
mod ban_user;
mod cast_vote;
mod categories;
mod change_user_role;
mod confirm_email;
mod create_new_user;
mod create_place;
mod create_trip;
mod delete_user;
mod error;
mod generate_itinerary;
mod get_place;
mod get_trip;
mod get_user;
mod invite_member;
mod list_members;
mod list_trip_places;
mod login;
mod oauth_login;
mod preferences;
mod recommend_places;
mod register;
mod remove_member;
mod remove_trip_place;
mod reorder_trip_places;
mod reset_password;
mod respond_to_invitation;
mod search_places;
mod update_place;
mod update_trip;
mod update_trip_place;
mod user_tokens;

#[cfg(test)]
pub mod tests;

type Result<T> = std::result::Result<T, Error>;

pub use self::{
    activity_log::*, add_trip_place::*, archive_place::*, archive_trip::*, authorize::*,
    ban_user::*, cast_vote::*, categories::*, change_user_role::*, confirm_email::*,
    create_new_user::*, create_place::*, create_trip::*, delete_user::*, error::Error,
    generate_itinerary::*, get_place::*, get_trip::*, get_user::*, invite_member::*,
    list_members::*, list_trip_places::*, login::*, oauth_login::*, preferences::*,
    recommend_places::*, register::*, remove_member::*, remove_trip_place::*,
    reorder_trip_places::*, reset_password::*, respond_to_invitation::*, search_places::*,
    update_place::*, update_trip::*, update_trip_place::*, user_tokens::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        db::*,
        entities::{
            activity::*, address::*, category::*, email::*, geo::*, id::*, identity::*,
            itinerary::*, nonce::*, password::*, place::*, preference::*, time::*, trip::*,
            trip_place::*, user::*, vote::*,
        },
        repositories::*,
    };
}
