use crate::repositories::*;

/// The one stop shop for use cases that span multiple aggregates.
///
/// Everything that holds a database connection implements the
/// individual repository traits, this umbrella trait exists for
/// generic bounds only.
pub trait Db:
    UserRepo
    + UserTokenRepo
    + IdentityRepo
    + CategoryRepo
    + PlaceRepo
    + TripRepo
    + MembershipRepo
    + TripPlaceRepo
    + VoteRepo
    + PreferenceRepo
    + ItineraryRepo
    + AuditLogRepo
{
}

impl<T> Db for T where
    T: UserRepo
        + UserTokenRepo
        + IdentityRepo
        + CategoryRepo
        + PlaceRepo
        + TripRepo
        + MembershipRepo
        + TripPlaceRepo
        + VoteRepo
        + PreferenceRepo
        + ItineraryRepo
        + AuditLogRepo
{
}
