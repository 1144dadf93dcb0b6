use super::prelude::*;
use crate::{usecases, RepoError};

/// Invites a registered user to the trip.
///
/// Re-inviting someone who declined resets the invitation to
/// pending. Repeating a pending or accepted invitation fails.
pub fn invite_member<D>(
    db: &D,
    owner: &EmailAddress,
    trip_id: &Id,
    invitee: &EmailAddress,
) -> Result<TripMembership>
where
    D: TripRepo + MembershipRepo + UserRepo,
{
    let trip = usecases::authorize_trip_owner(db, owner, trip_id)?;
    if trip.is_archived() {
        return Err(Error::TripArchived);
    }
    if owner == invitee {
        return Err(Error::SelfInvitation);
    }
    if db.try_get_user_by_email(invitee)?.is_none() {
        return Err(Error::UserDoesNotExist);
    }
    let membership = match db.try_get_membership(trip_id, invitee)? {
        None => {
            let membership = TripMembership {
                trip: trip_id.clone(),
                member: invitee.clone(),
                role: MemberRole::Member,
                status: MembershipStatus::Pending,
                invited_at: Timestamp::now(),
                responded_at: None,
            };
            db.create_membership(&membership)?;
            membership
        }
        Some(mut membership) if membership.status == MembershipStatus::Declined => {
            membership.status = MembershipStatus::Pending;
            membership.invited_at = Timestamp::now();
            membership.responded_at = None;
            db.update_membership(&membership)?;
            membership
        }
        Some(_) => return Err(Error::Repo(RepoError::AlreadyExists)),
    };
    log::info!("Invited {} to trip {}", invitee, trip_id);
    Ok(membership)
}
