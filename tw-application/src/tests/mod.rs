mod scenarios;

pub mod prelude {

    pub fn default_new_trip(title: &str) -> usecases::NewTrip {
        usecases::NewTrip {
            title: title.into(),
            description: None,
            starts_on: date!(2026 - 07 - 04),
            ends_on: date!(2026 - 07 - 08),
            lat: 52.52,
            lng: 13.405,
        }
    }

    use time::macros::date;

    pub use tw_core::{
        entities::{
            activity::*, category::*, email::*, id::*, identity::*, itinerary::*, nonce::*,
            password::*, place::*, preference::*, time::*, trip::*, trip_place::*, user::*,
            vote::*,
        },
        gateways::oauth::ExternalProfile,
        repositories::{Error as RepoError, *},
        usecases,
    };

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    pub struct DummyNotifyGW;

    impl tw_core::gateways::notify::NotificationGateway for DummyNotifyGW {
        fn user_registered(&self, _: &User, _: &str) {}
        fn user_reset_password_requested(&self, _: &EmailNonce) {}
        fn member_invited(&self, _: &Trip, _: &EmailAddress) {}
        fn invitation_answered(&self, _: &Trip, _: &TripMembership) {}
        fn place_proposed(&self, _: &Trip, _: &Place, _: &[EmailAddress]) {}
    }

    /// An OAuth gateway that accepts any access token.
    pub struct StaticProfileOAuthGW(pub ExternalProfile);

    impl tw_core::gateways::oauth::OAuthGateway for StaticProfileOAuthGW {
        fn fetch_profile(
            &self,
            _provider: OAuthProvider,
            _access_token: &str,
        ) -> anyhow::Result<ExternalProfile> {
            Ok(self.0.clone())
        }
    }

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
        pub notify: DummyNotifyGW,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            tw_db_sqlite::run_embedded_database_migrations(db_connections.exclusive().unwrap());
            Self {
                db_connections,
                notify: DummyNotifyGW,
            }
        }

        /// Registers a confirmed account with the default password.
        pub fn create_user_with_email(&self, email: &str) -> EmailAddress {
            self.create_account(email, Role::User)
        }

        pub fn create_admin(&self, email: &str) -> EmailAddress {
            self.create_account(email, Role::Admin)
        }

        fn create_account(&self, email: &str, role: Role) -> EmailAddress {
            let email: EmailAddress = email.parse().unwrap();
            let db = self.db_connections.exclusive().unwrap();
            usecases::create_new_user(
                &db,
                usecases::NewUser {
                    email: email.clone(),
                    password: "secret123".into(),
                    display_name: None,
                },
            )
            .unwrap();
            let mut user = db.get_user_by_email(&email).unwrap();
            user.email_confirmed = true;
            user.role = role;
            db.update_user(&user).unwrap();
            email
        }

        pub fn try_get_user(&self, email: &EmailAddress) -> Option<User> {
            self.db_connections
                .shared()
                .unwrap()
                .try_get_user_by_email(email)
                .unwrap_or_default()
        }

        pub fn create_trip(&self, owner: &EmailAddress, title: &str) -> Trip {
            flows::create_trip(&self.db_connections, owner.clone(), default_new_trip(title))
                .unwrap()
        }

        pub fn create_category(&self, slug: &str) -> Category {
            let category = Category {
                id: Id::new(),
                slug: slug.into(),
                icon: None,
                translations: vec![],
            };
            self.db_connections
                .exclusive()
                .unwrap()
                .create_category(&category)
                .unwrap();
            category
        }

        pub fn create_place(&self, account: &EmailAddress, title: &str) -> Place {
            let category = self
                .db_connections
                .shared()
                .unwrap()
                .try_get_category_by_slug("sights")
                .unwrap()
                .unwrap_or_else(|| self.create_category("sights"));
            flows::create_place(
                &self.db_connections,
                account,
                usecases::NewPlace {
                    title: title.into(),
                    description: String::new(),
                    lat: 52.5163,
                    lng: 13.3777,
                    category: category.id,
                    address: None,
                    rating: None,
                    rating_count: 0,
                    image_url: None,
                },
            )
            .unwrap()
        }

        pub fn invite(&self, owner: &EmailAddress, trip_id: &Id, invitee: &EmailAddress) {
            flows::invite_member(&self.db_connections, &self.notify, owner, trip_id, invitee)
                .unwrap();
        }

        pub fn invite_and_accept(
            &self,
            owner: &EmailAddress,
            trip_id: &Id,
            member: &EmailAddress,
        ) {
            self.invite(owner, trip_id, member);
            flows::respond_to_invitation(&self.db_connections, &self.notify, member, trip_id, true)
                .unwrap();
        }

        /// Attaches a place on behalf of the trip owner.
        pub fn attach_place(
            &self,
            account: &EmailAddress,
            trip_id: &Id,
            place_id: &Id,
        ) -> TripPlace {
            self.add_trip_place(account, trip_id, place_id)
        }

        /// Proposes a place on behalf of an accepted member.
        pub fn propose_place(
            &self,
            account: &EmailAddress,
            trip_id: &Id,
            place_id: &Id,
        ) -> TripPlace {
            self.add_trip_place(account, trip_id, place_id)
        }

        fn add_trip_place(&self, account: &EmailAddress, trip_id: &Id, place_id: &Id) -> TripPlace {
            flows::add_trip_place(
                &self.db_connections,
                &self.notify,
                account,
                trip_id,
                usecases::NewTripPlace {
                    place: place_id.clone(),
                    day: None,
                    is_fixed: false,
                    note: None,
                },
            )
            .unwrap()
        }

        pub fn cast_vote(&self, account: &EmailAddress, trip_id: &Id, place_id: &Id, score: u8) {
            flows::cast_vote(&self.db_connections, account, trip_id, place_id, score).unwrap();
        }
    }
}
