use askama::Template;
use time::{format_description::FormatItem, macros::format_description};
use tw_entities::{address::*, email::*, place::*, trip::*};

const DATE_FORMAT: &[FormatItem] = format_description!("[year]-[month]-[day]");

fn format_date(date: time::Date) -> String {
    date.format(DATE_FORMAT).unwrap_or_default()
}

fn trip_dates(trip: &Trip) -> String {
    format!(
        "{} to {}",
        format_date(trip.starts_on),
        format_date(trip.ends_on)
    )
}

fn address_line(address: Option<&Address>) -> String {
    if let Some(address) = address {
        let Address {
            ref street,
            ref zip,
            ref city,
            ref country,
        } = address;
        [
            street.as_deref().unwrap_or(""),
            &[zip.as_deref().unwrap_or(""), city.as_deref().unwrap_or("")].join(" "),
            country.as_deref().unwrap_or(""),
        ]
        .join(", ")
    } else {
        Default::default()
    }
}

#[derive(Template)]
#[template(path = "email_user_registration/subject_EN.txt")]
struct EmailUserRegistrationSubjectTemplate;

#[derive(Template)]
#[template(path = "email_user_registration/body_EN.txt")]
struct EmailUserRegistrationBodyTemplate<'a> {
    url: &'a str,
}

pub fn user_registration_email(url: &str) -> EmailContent {
    let subject = EmailUserRegistrationSubjectTemplate.render().unwrap();
    let body = EmailUserRegistrationBodyTemplate { url }.render().unwrap();
    EmailContent { subject, body }
}

#[derive(Template)]
#[template(path = "email_reset_password/subject_EN.txt")]
struct EmailUserResetPasswordSubjectTemplate;

#[derive(Template)]
#[template(path = "email_reset_password/body_EN.txt")]
struct EmailUserResetPasswordBodyTemplate<'a> {
    url: &'a str,
}

pub fn user_reset_password_email(url: &str) -> EmailContent {
    let subject = EmailUserResetPasswordSubjectTemplate.render().unwrap();
    let body = EmailUserResetPasswordBodyTemplate { url }.render().unwrap();
    EmailContent { subject, body }
}

pub fn member_invited_email(trip: &Trip) -> EmailContent {
    let subject = format!("TripWeaver - you are invited to \"{}\"", trip.title);
    let body = format!(
        "{owner} invited you to join the trip \"{title}\" ({dates}).\n\n\
         Log in to TripWeaver to accept or decline the invitation.",
        owner = trip.owner,
        title = trip.title,
        dates = trip_dates(trip),
    );
    EmailContent { subject, body }
}

pub fn invitation_answered_email(trip: &Trip, membership: &TripMembership) -> EmailContent {
    let subject = format!(
        "TripWeaver - {member} {status} your invitation",
        member = membership.member,
        status = membership.status.as_str(),
    );
    let body = format!(
        "{member} has {status} the invitation to your trip \"{title}\" ({dates}).",
        member = membership.member,
        status = membership.status.as_str(),
        title = trip.title,
        dates = trip_dates(trip),
    );
    EmailContent { subject, body }
}

pub fn place_proposed_email(trip: &Trip, place: &Place) -> EmailContent {
    let subject = format!("TripWeaver - new place proposed for \"{}\"", trip.title);
    let address_line = address_line(place.location.address.as_ref());
    let body = format!(
        "A new place was proposed for your trip \"{title}\":\n\n\
         {place_title}\n{description}\n{address_line}\n\n\
         Log in to TripWeaver to vote on it.",
        title = trip.title,
        place_title = place.title,
        description = place.description,
    );
    EmailContent { subject, body }
}
