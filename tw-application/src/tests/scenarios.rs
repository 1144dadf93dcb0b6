use super::prelude::*;

fn ids_of_day(itinerary: &TripItinerary, day: u32) -> Vec<Id> {
    itinerary
        .days
        .iter()
        .find(|d| d.day == day)
        .map(|d| d.items.iter().map(|i| i.place.clone()).collect())
        .unwrap_or_default()
}

#[test]
fn plan_a_city_break_with_friends() {
    let fixture = BackendFixture::new();

    // Sign up and confirm the organizer.
    let owner: EmailAddress = "organizer@bar.tld".parse().unwrap();
    flows::register_user(&fixture.db_connections, &fixture.notify, &owner, "secret123").unwrap();
    let token = EmailNonce {
        email: owner.clone(),
        nonce: Nonce::new(),
    }
    .encode_to_string();
    flows::confirm_email_address(&fixture.db_connections, &token).unwrap();

    let friend = fixture.create_user_with_email("friend@bar.tld");
    let trip = fixture.create_trip(&owner, "Berlin city break");
    assert_eq!(5, trip.duration_days());

    fixture.invite_and_accept(&owner, &trip.id, &friend);

    // The owner schedules the museum, the friend proposes a tour.
    let museum = fixture.create_place(&owner, "Pergamon Museum");
    let tour = fixture.create_place(&friend, "Spree boat tour");
    flows::add_trip_place(
        &fixture.db_connections,
        &fixture.notify,
        &owner,
        &trip.id,
        usecases::NewTripPlace {
            place: museum.id.clone(),
            day: Some(1),
            is_fixed: true,
            note: None,
        },
    )
    .unwrap();
    let proposed = fixture.propose_place(&friend, &trip.id, &tour.id);
    assert_eq!(TripPlaceStatus::Proposed, proposed.status);

    // Voting happens while the proposal is still open.
    fixture.cast_vote(&friend, &trip.id, &tour.id, 5);
    fixture.cast_vote(&owner, &trip.id, &tour.id, 4);

    // The owner accepts the proposal for day 2.
    flows::update_trip_place(
        &fixture.db_connections,
        &owner,
        &trip.id,
        &tour.id,
        usecases::UpdateTripPlace {
            status: TripPlaceStatus::Accepted,
            is_fixed: false,
            day: Some(2),
            order_index: None,
            note: None,
        },
    )
    .unwrap();

    let itinerary = flows::get_itinerary(
        &fixture.db_connections,
        &friend,
        &trip.id,
        flows::DEFAULT_ITINERARY_TTL,
    )
    .unwrap();
    assert_eq!(5, itinerary.days.len());
    assert_eq!(vec![museum.id.clone()], ids_of_day(&itinerary, 1));
    assert_eq!(vec![tour.id.clone()], ids_of_day(&itinerary, 2));
    assert!(ids_of_day(&itinerary, 3).is_empty());

    // Every step of the session is on the audit trail, most
    // recent first.
    let db = fixture.db_connections.shared().unwrap();
    let entries = db
        .audit_log_entries(
            &AuditLogQuery {
                action_prefix: Some("trip.".into()),
                ..Default::default()
            },
            &Pagination::default(),
        )
        .unwrap();
    let actions: Vec<_> = entries.iter().map(|e| e.action.as_str()).collect();
    assert_eq!(
        vec![
            "trip.itinerary.refresh",
            "trip.place.update",
            "trip.vote",
            "trip.vote",
            "trip.place.add",
            "trip.place.add",
            "trip.member.respond",
            "trip.member.invite",
            "trip.create",
        ],
        actions
    );
}

#[test]
fn recommendations_follow_the_groups_preferences() {
    let fixture = BackendFixture::new();
    let owner = fixture.create_user_with_email("organizer@bar.tld");
    let friend = fixture.create_user_with_email("friend@bar.tld");
    let trip = fixture.create_trip(&owner, "Berlin city break");
    fixture.invite_and_accept(&owner, &trip.id, &friend);

    let museums = fixture.create_category("museums");
    let tours = fixture.create_category("tours");
    let catalog_place = |title: &str, category: &Category, rating: f64| usecases::NewPlace {
        title: title.into(),
        description: String::new(),
        lat: 52.516,
        lng: 13.378,
        category: category.id.clone(),
        address: None,
        rating: Some(rating),
        rating_count: 100,
        image_url: None,
    };
    let museum = flows::create_place(
        &fixture.db_connections,
        &owner,
        catalog_place("Pergamon Museum", &museums, 4.0),
    )
    .unwrap();
    flows::create_place(
        &fixture.db_connections,
        &owner,
        catalog_place("Spree boat tour", &tours, 5.0),
    )
    .unwrap();
    // Far outside of the default search radius.
    flows::create_place(
        &fixture.db_connections,
        &owner,
        usecases::NewPlace {
            lat: 53.55,
            lng: 9.99,
            ..catalog_place("Hamburg harbour", &tours, 5.0)
        },
    )
    .unwrap();

    // Without stored preferences the better rated tour wins.
    let recommended = usecases::recommend_places(
        &fixture.db_connections.shared().unwrap(),
        &friend,
        &trip.id,
        Default::default(),
    )
    .unwrap();
    let titles: Vec<_> = recommended.iter().map(|r| r.place.title.as_str()).collect();
    assert_eq!(vec!["Spree boat tour", "Pergamon Museum"], titles);

    // The friend's strong museum preference outweighs the rating gap.
    flows::update_preferences(
        &fixture.db_connections,
        &friend,
        vec![usecases::NewPreference {
            category: museums.id.clone(),
            score: 2,
        }],
    )
    .unwrap();
    let recommended = usecases::recommend_places(
        &fixture.db_connections.shared().unwrap(),
        &friend,
        &trip.id,
        Default::default(),
    )
    .unwrap();
    assert_eq!("Pergamon Museum", recommended[0].place.title);

    // Attached places leave the list.
    fixture.attach_place(&owner, &trip.id, &museum.id);
    let recommended = usecases::recommend_places(
        &fixture.db_connections.shared().unwrap(),
        &friend,
        &trip.id,
        Default::default(),
    )
    .unwrap();
    let titles: Vec<_> = recommended.iter().map(|r| r.place.title.as_str()).collect();
    assert_eq!(vec!["Spree boat tour"], titles);
}
