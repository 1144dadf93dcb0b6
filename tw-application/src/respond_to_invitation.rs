use tw_core::gateways::notify::NotificationGateway;

use super::*;

pub fn respond_to_invitation(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    invitee: &EmailAddress,
    trip_id: &Id,
    accept: bool,
) -> Result<TripMembership> {
    let membership = connections.exclusive()?.transaction(|conn| {
        let membership =
            usecases::respond_to_invitation(conn, invitee, trip_id, accept).map_err(|err| {
                warn!("Failed to answer the invitation of {} to trip {}: {}", invitee, trip_id, err);
                err
            })?;
        usecases::record_activity(
            conn,
            AuditLogEntry::new(Activity::now(Some(invitee.clone())), "trip.member.respond")
                .context(trip_id.as_str())
                .comment(membership.status.as_str()),
        )?;
        Ok::<_, usecases::Error>(membership)
    })?;

    // Tell the owner after the transaction has been committed.
    match connections.shared()?.get_trip(trip_id.as_str()) {
        Ok(trip) => notify.invitation_answered(&trip, &membership),
        Err(err) => error!("Failed to load trip {} for the answer e-mail: {}", trip_id, err),
    }

    Ok(membership)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    fn respond(
        fixture: &BackendFixture,
        invitee: &EmailAddress,
        trip_id: &Id,
        accept: bool,
    ) -> super::Result<TripMembership> {
        super::respond_to_invitation(
            &fixture.db_connections,
            &fixture.notify,
            invitee,
            trip_id,
            accept,
        )
    }

    #[test]
    fn should_accept_a_pending_invitation() {
        let fixture = BackendFixture::new();
        let owner = fixture.create_user_with_email("owner@bar.tld");
        let invitee = fixture.create_user_with_email("friend@bar.tld");
        let trip = fixture.create_trip(&owner, "Summer");
        fixture.invite(&owner, &trip.id, &invitee);

        let membership = respond(&fixture, &invitee, &trip.id, true).unwrap();
        assert_eq!(MembershipStatus::Accepted, membership.status);
        assert!(membership.responded_at.is_some());

        let db = fixture.db_connections.shared().unwrap();
        let stored = db.get_membership(&trip.id, &invitee).unwrap();
        assert_eq!(MembershipStatus::Accepted, stored.status);
    }

    #[test]
    fn should_decline_a_pending_invitation() {
        let fixture = BackendFixture::new();
        let owner = fixture.create_user_with_email("owner@bar.tld");
        let invitee = fixture.create_user_with_email("friend@bar.tld");
        let trip = fixture.create_trip(&owner, "Summer");
        fixture.invite(&owner, &trip.id, &invitee);

        let membership = respond(&fixture, &invitee, &trip.id, false).unwrap();
        assert_eq!(MembershipStatus::Declined, membership.status);
    }

    #[test]
    fn should_not_answer_an_invitation_twice() {
        let fixture = BackendFixture::new();
        let owner = fixture.create_user_with_email("owner@bar.tld");
        let invitee = fixture.create_user_with_email("friend@bar.tld");
        let trip = fixture.create_trip(&owner, "Summer");
        fixture.invite(&owner, &trip.id, &invitee);

        respond(&fixture, &invitee, &trip.id, false).unwrap();
        assert!(matches!(
            respond(&fixture, &invitee, &trip.id, true),
            Err(AppError::Business(BError::Parameter(
                usecases::Error::InvitationAlreadyAnswered
            )))
        ));
    }
}
