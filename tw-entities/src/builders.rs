pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{place_builder::*, trip_builder::*, user_builder::*};

pub mod place_builder {

    use super::*;
    use crate::{activity::*, address::*, geo::*, id::*, place::*};

    #[derive(Debug)]
    pub struct PlaceBuild {
        place: Place,
    }

    impl PlaceBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.place.id = id.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.place.title = title.into();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.place.description = desc.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.place.location.pos = pos;
            self
        }
        pub fn address(mut self, address: Address) -> Self {
            self.place.location.address = Some(address);
            self
        }
        pub fn category(mut self, category: &str) -> Self {
            self.place.category = category.into();
            self
        }
        pub fn rating(mut self, rating: f64, count: u64) -> Self {
            self.place.rating = Some(ExternalRating::new(rating));
            self.place.rating_count = count;
            self
        }
        pub fn archived(mut self, at: crate::time::Timestamp) -> Self {
            self.place.archived_at = Some(at);
            self
        }
        pub fn finish(self) -> Place {
            self.place
        }
    }

    impl Builder for Place {
        type Build = PlaceBuild;
        fn build() -> PlaceBuild {
            PlaceBuild {
                place: Place {
                    id: Id::new(),
                    created: Activity::now(None),
                    title: "".into(),
                    description: "".into(),
                    location: Location {
                        pos: MapPoint::from_lat_lng_deg(0.0, 0.0),
                        address: None,
                    },
                    category: Id::new(),
                    rating: None,
                    rating_count: 0,
                    image_url: None,
                    archived_at: None,
                },
            }
        }
    }
}

pub mod trip_builder {

    use super::*;
    use crate::{email::EmailAddress, geo::*, id::*, time::Timestamp, trip::*};
    use time::{Date, Month};

    #[derive(Debug)]
    pub struct TripBuild {
        trip: Trip,
    }

    impl TripBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.trip.id = id.into();
            self
        }
        pub fn owner(mut self, owner: &str) -> Self {
            self.trip.owner = owner.parse().unwrap();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.trip.title = title.into();
            self
        }
        pub fn dates(mut self, starts_on: Date, ends_on: Date) -> Self {
            self.trip.starts_on = starts_on;
            self.trip.ends_on = ends_on;
            self
        }
        pub fn days(mut self, count: u32) -> Self {
            debug_assert!(count >= 1);
            self.trip.ends_on = self
                .trip
                .starts_on
                .checked_add(time::Duration::days(i64::from(count) - 1))
                .unwrap();
            self
        }
        pub fn start_pos(mut self, pos: MapPoint) -> Self {
            self.trip.start_pos = pos;
            self
        }
        pub fn archived(mut self, at: Timestamp) -> Self {
            self.trip.archived_at = Some(at);
            self
        }
        pub fn finish(self) -> Trip {
            self.trip
        }
    }

    impl Builder for Trip {
        type Build = TripBuild;
        fn build() -> TripBuild {
            let starts_on = Date::from_calendar_date(2024, Month::July, 1).unwrap();
            TripBuild {
                trip: Trip {
                    id: Id::new(),
                    owner: EmailAddress::new_unchecked("owner@example.com".into()),
                    title: "".into(),
                    description: None,
                    starts_on,
                    ends_on: starts_on,
                    start_pos: MapPoint::from_lat_lng_deg(0.0, 0.0),
                    created_at: Timestamp::now(),
                    archived_at: None,
                },
            }
        }
    }
}

pub mod user_builder {

    use super::*;
    use crate::{email::EmailAddress, password::Password, user::*};

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn email(mut self, email: &str) -> Self {
            self.user.email = email.parse().unwrap();
            self
        }
        pub fn confirmed(mut self, confirmed: bool) -> Self {
            self.user.email_confirmed = confirmed;
            self
        }
        pub fn password(mut self, clear_text: &str) -> Self {
            self.user.password = clear_text.parse().unwrap();
            self
        }
        pub fn role(mut self, role: Role) -> Self {
            self.user.role = role;
            self
        }
        pub fn banned(mut self, at: crate::time::Timestamp) -> Self {
            self.user.banned_at = Some(at);
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> UserBuild {
            UserBuild {
                user: User {
                    email: EmailAddress::new_unchecked("user@example.com".into()),
                    email_confirmed: true,
                    password: Password::from_hash("".into()),
                    display_name: None,
                    role: Role::User,
                    banned_at: None,
                },
            }
        }
    }
}
