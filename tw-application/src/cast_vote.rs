use super::*;

pub fn cast_vote(
    connections: &sqlite::Connections,
    account: &EmailAddress,
    trip_id: &Id,
    place_id: &Id,
    score: u8,
) -> Result<PlaceVote> {
    Ok(connections.exclusive()?.transaction(|conn| {
        let vote = usecases::cast_vote(conn, account, trip_id, place_id, score).map_err(|err| {
            warn!("Failed to cast a vote for place {} of trip {}: {}", place_id, trip_id, err);
            err
        })?;
        usecases::record_activity(
            conn,
            AuditLogEntry::new(Activity::now(Some(account.clone())), "trip.vote")
                .context(trip_id.as_str())
                .comment(place_id.as_str()),
        )?;
        Ok::<_, usecases::Error>(vote)
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn recasting_should_replace_the_previous_vote() {
        let fixture = BackendFixture::new();
        let owner = fixture.create_user_with_email("owner@bar.tld");
        let member = fixture.create_user_with_email("friend@bar.tld");
        let trip = fixture.create_trip(&owner, "City break");
        fixture.invite_and_accept(&owner, &trip.id, &member);
        let place = fixture.create_place(&owner, "Harbor tour");
        fixture.attach_place(&owner, &trip.id, &place.id);

        super::cast_vote(&fixture.db_connections, &member, &trip.id, &place.id, 2).unwrap();
        super::cast_vote(&fixture.db_connections, &member, &trip.id, &place.id, 5).unwrap();

        let db = fixture.db_connections.shared().unwrap();
        let votes = db.votes_for_place(&trip.id, &place.id).unwrap();
        assert_eq!(1, votes.len());
        assert_eq!(5u8, u8::from(votes[0].score));
    }

    #[test]
    fn should_reject_scores_outside_the_range() {
        let fixture = BackendFixture::new();
        let owner = fixture.create_user_with_email("owner@bar.tld");
        let trip = fixture.create_trip(&owner, "City break");
        let place = fixture.create_place(&owner, "Harbor tour");
        fixture.attach_place(&owner, &trip.id, &place.id);

        assert!(matches!(
            super::cast_vote(&fixture.db_connections, &owner, &trip.id, &place.id, 6),
            Err(AppError::Business(BError::Parameter(usecases::Error::VoteScore)))
        ));
    }

    #[test]
    fn should_not_vote_for_unattached_places() {
        let fixture = BackendFixture::new();
        let owner = fixture.create_user_with_email("owner@bar.tld");
        let trip = fixture.create_trip(&owner, "City break");
        let place = fixture.create_place(&owner, "Harbor tour");

        assert!(
            super::cast_vote(&fixture.db_connections, &owner, &trip.id, &place.id, 3).is_err()
        );
    }
}
