use super::prelude::*;

/// Accepts or declines a pending invitation.
pub fn respond_to_invitation<D>(
    db: &D,
    invitee: &EmailAddress,
    trip_id: &Id,
    accept: bool,
) -> Result<TripMembership>
where
    D: TripRepo + MembershipRepo,
{
    let trip = db.get_trip(trip_id.as_str())?;
    if trip.is_archived() {
        return Err(Error::TripArchived);
    }
    let mut membership = db.get_membership(trip_id, invitee)?;
    if membership.status != MembershipStatus::Pending {
        return Err(Error::InvitationAlreadyAnswered);
    }
    membership.status = if accept {
        MembershipStatus::Accepted
    } else {
        MembershipStatus::Declined
    };
    membership.responded_at = Some(Timestamp::now());
    db.update_membership(&membership)?;
    log::info!("{} {} the invitation to trip {}", invitee, membership.status.as_str(), trip_id);
    Ok(membership)
}
