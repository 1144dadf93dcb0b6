use thiserror::Error;

use crate::{
    repositories,
    util::validate::{PlaceInvalidation, TripInvalidation},
};

#[derive(Debug, Error)]
pub enum Error {
    #[error("The title is invalid")]
    Title,
    #[error("Invalid email address")]
    EmailAddress,
    #[error("Invalid password")]
    Password,
    #[error("Invalid credentials")]
    Credentials,
    #[error("Email not confirmed")]
    EmailNotConfirmed,
    #[error("The account is banned")]
    AccountBanned,
    #[error("This is not allowed")]
    Forbidden,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("The user already exists")]
    UserExists,
    #[error("The user does not exist")]
    UserDoesNotExist,
    #[error("The end date is before the start")]
    EndDateBeforeStart,
    #[error("Invalid position")]
    InvalidPosition,
    #[error("Vote score out of range")]
    VoteScore,
    #[error("Rating value out of range")]
    RatingValue,
    #[error("Invalid limit")]
    InvalidLimit,
    #[error("Invalid radius")]
    InvalidRadius,
    #[error("The day is outside of the trip")]
    InvalidDay,
    #[error("Users cannot invite themselves")]
    SelfInvitation,
    #[error("The invitation has already been answered")]
    InvitationAlreadyAnswered,
    #[error("The trip owner cannot be changed")]
    OwnerImmutable,
    #[error("The place has been archived")]
    PlaceArchived,
    #[error("The trip has been archived")]
    TripArchived,
    #[error("Token invalid")]
    TokenInvalid,
    #[error("Token expired")]
    TokenExpired,
    #[error("Invalid nonce")]
    InvalidNonce,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<tw_entities::password::ParseError> for Error {
    fn from(_: tw_entities::password::ParseError) -> Self {
        Self::Password
    }
}

impl From<tw_entities::nonce::EmailNonceDecodingError> for Error {
    fn from(_: tw_entities::nonce::EmailNonceDecodingError) -> Self {
        Self::InvalidNonce
    }
}

impl From<tw_entities::vote::InvalidVoteScore> for Error {
    fn from(_: tw_entities::vote::InvalidVoteScore) -> Self {
        Self::VoteScore
    }
}

impl From<TripInvalidation> for Error {
    fn from(err: TripInvalidation) -> Self {
        match err {
            TripInvalidation::Title => Self::Title,
            TripInvalidation::EndDateBeforeStart => Self::EndDateBeforeStart,
            TripInvalidation::Position => Self::InvalidPosition,
        }
    }
}

impl From<PlaceInvalidation> for Error {
    fn from(err: PlaceInvalidation) -> Self {
        match err {
            PlaceInvalidation::Title => Self::Title,
            PlaceInvalidation::Position => Self::InvalidPosition,
            PlaceInvalidation::Rating => Self::RatingValue,
        }
    }
}

impl From<crate::authorization::user::Error> for Error {
    fn from(err: crate::authorization::user::Error) -> Self {
        use crate::authorization::user::Error as AuthError;
        match err {
            AuthError::UnauthorizedRole => Self::Forbidden,
            AuthError::BannedAccount => Self::AccountBanned,
        }
    }
}

impl From<crate::authorization::trip::Error> for Error {
    fn from(_: crate::authorization::trip::Error) -> Self {
        Self::Forbidden
    }
}
