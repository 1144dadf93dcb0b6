use crate::entities::{
    email::EmailAddress,
    nonce::EmailNonce,
    place::Place,
    trip::{Trip, TripMembership},
    user::User,
};

pub trait NotificationGateway {
    fn user_registered(&self, user: &User, confirmation_token: &str);
    fn user_reset_password_requested(&self, email_nonce: &EmailNonce);
    fn member_invited(&self, trip: &Trip, invitee: &EmailAddress);
    fn invitation_answered(&self, trip: &Trip, membership: &TripMembership);
    fn place_proposed(&self, trip: &Trip, place: &Place, member_addresses: &[EmailAddress]);
}
