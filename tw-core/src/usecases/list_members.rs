use super::prelude::*;
use crate::usecases;

pub fn list_members<D>(db: &D, account: &EmailAddress, trip_id: &Id) -> Result<Vec<TripMembership>>
where
    D: TripRepo + MembershipRepo,
{
    usecases::authorize_trip_read(db, account, trip_id)?;
    Ok(db.memberships_of_trip(trip_id)?)
}
