use super::prelude::*;
use crate::authorization;

pub fn authorize_user_by_email<R: UserRepo>(
    repo: &R,
    email: &EmailAddress,
    min_required_role: Role,
) -> Result<User> {
    if let Some(user) = repo.try_get_user_by_email(email)? {
        return authorization::user::authorize_role(&user, min_required_role)
            .map(|()| user)
            .map_err(Into::into);
    }
    Err(Error::Unauthorized)
}

/// Loads the trip if the user is allowed to see it.
pub fn authorize_trip_read<D>(db: &D, email: &EmailAddress, trip_id: &Id) -> Result<Trip>
where
    D: TripRepo + MembershipRepo,
{
    let trip = db.get_trip(trip_id.as_str())?;
    let memberships = db.memberships_of_trip(trip_id)?;
    authorization::trip::authorize_trip_read(&trip, email, &memberships)?;
    Ok(trip)
}

/// Loads the trip if the user may contribute to it, i.e. is the
/// owner or an accepted member.
pub fn authorize_trip_contributor<D>(db: &D, email: &EmailAddress, trip_id: &Id) -> Result<Trip>
where
    D: TripRepo + MembershipRepo,
{
    let trip = db.get_trip(trip_id.as_str())?;
    let memberships = db.memberships_of_trip(trip_id)?;
    authorization::trip::authorize_trip_contributor(&trip, email, &memberships)?;
    Ok(trip)
}

/// Loads the trip if the user owns it.
pub fn authorize_trip_owner<D>(db: &D, email: &EmailAddress, trip_id: &Id) -> Result<Trip>
where
    D: TripRepo,
{
    let trip = db.get_trip(trip_id.as_str())?;
    authorization::trip::authorize_trip_owner(&trip, email)?;
    Ok(trip)
}
