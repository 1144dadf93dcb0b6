use std::sync::Arc;

use tw_core::gateways::{email::EmailGateway, notify::NotificationGateway};
use tw_entities::{
    email::EmailAddress,
    nonce::EmailNonce,
    place::Place,
    trip::{Trip, TripMembership},
    user::User,
};

use crate::user_communication;

/// Turns domain events into e-mails.
#[derive(Clone)]
pub struct Notify {
    email_gw: Arc<dyn EmailGateway + Send + Sync + 'static>,
    public_url: String,
}

impl Notify {
    pub fn new<G>(gw: G, public_url: impl Into<String>) -> Self
    where
        G: EmailGateway + Send + Sync + 'static,
    {
        let mut public_url = public_url.into();
        while public_url.ends_with('/') {
            public_url.pop();
        }
        Self {
            email_gw: Arc::new(gw),
            public_url,
        }
    }
}

impl NotificationGateway for Notify {
    fn user_registered(&self, user: &User, confirmation_token: &str) {
        let url = format!(
            "{}/confirm-email?token={}",
            self.public_url, confirmation_token
        );
        let content = user_communication::user_registration_email(&url);
        log::info!("Sending confirmation e-mail to user {}", user.email);
        self.email_gw.compose_and_send(&[user.email.clone()], &content);
    }

    fn user_reset_password_requested(&self, email_nonce: &EmailNonce) {
        let url = format!(
            "{}/reset-password?token={}",
            self.public_url,
            email_nonce.encode_to_string()
        );
        let content = user_communication::user_reset_password_email(&url);
        log::info!(
            "Sending e-mail to {} after password reset requested",
            email_nonce.email
        );
        self.email_gw
            .compose_and_send(&[email_nonce.email.clone()], &content);
    }

    fn member_invited(&self, trip: &Trip, invitee: &EmailAddress) {
        let content = user_communication::member_invited_email(trip);
        log::info!("Sending invitation e-mail for trip {} to {invitee}", trip.id);
        self.email_gw.compose_and_send(&[invitee.clone()], &content);
    }

    fn invitation_answered(&self, trip: &Trip, membership: &TripMembership) {
        let content = user_communication::invitation_answered_email(trip, membership);
        log::info!(
            "Notifying {} that {} {} the invitation to trip {}",
            trip.owner,
            membership.member,
            membership.status.as_str(),
            trip.id
        );
        self.email_gw.compose_and_send(&[trip.owner.clone()], &content);
    }

    fn place_proposed(&self, trip: &Trip, place: &Place, member_addresses: &[EmailAddress]) {
        let content = user_communication::place_proposed_email(trip, place);
        log::info!(
            "Sending e-mails to {} members after place {} was proposed for trip {}",
            member_addresses.len(),
            place.id,
            trip.id
        );
        self.email_gw.compose_and_send(member_addresses, &content);
    }
}
