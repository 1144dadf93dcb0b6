use super::*;
use tw_entities as e;

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            email,
            email_confirmed,
            password: _password,
            display_name,
            role,
            banned_at,
        } = from;
        Self {
            email: email.into_string(),
            email_confirmed,
            display_name,
            role: role.into(),
            banned: banned_at.is_some(),
        }
    }
}

impl From<e::user::Role> for UserRole {
    fn from(from: e::user::Role) -> Self {
        use e::user::Role::*;
        match from {
            Guest => UserRole::Guest,
            User => UserRole::User,
            Admin => UserRole::Admin,
        }
    }
}

impl From<UserRole> for e::user::Role {
    fn from(from: UserRole) -> Self {
        use e::user::Role::*;
        match from {
            UserRole::Guest => Guest,
            UserRole::User => User,
            UserRole::Admin => Admin,
        }
    }
}

impl From<e::identity::OAuthProvider> for OAuthProvider {
    fn from(from: e::identity::OAuthProvider) -> Self {
        use e::identity::OAuthProvider::*;
        match from {
            Google => OAuthProvider::Google,
            Facebook => OAuthProvider::Facebook,
        }
    }
}

impl From<OAuthProvider> for e::identity::OAuthProvider {
    fn from(from: OAuthProvider) -> Self {
        use e::identity::OAuthProvider::*;
        match from {
            OAuthProvider::Google => Google,
            OAuthProvider::Facebook => Facebook,
        }
    }
}

impl From<e::category::Category> for Category {
    fn from(from: e::category::Category) -> Self {
        let e::category::Category {
            id,
            slug,
            icon,
            translations,
        } = from;
        Self {
            id: id.into(),
            slug,
            icon,
            translations: translations.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<e::category::CategoryTranslation> for CategoryTranslation {
    fn from(from: e::category::CategoryTranslation) -> Self {
        let e::category::CategoryTranslation { locale, name } = from;
        Self { locale, name }
    }
}

impl From<e::place::Place> for Place {
    fn from(from: e::place::Place) -> Self {
        let e::place::Place {
            id,
            created,
            title,
            description,
            location,
            category,
            rating,
            rating_count,
            image_url,
            archived_at,
        } = from;
        let e::place::Location { pos, address } = location;
        let e::address::Address {
            street,
            zip,
            city,
            country,
        } = address.unwrap_or_default();
        Self {
            id: id.into(),
            created: created.at.as_millis(),
            title,
            description,
            lat: pos.lat().to_deg(),
            lng: pos.lng().to_deg(),
            street,
            zip,
            city,
            country,
            category: category.into(),
            rating: rating.map(Into::into),
            rating_count,
            image_url,
            archived: archived_at.is_some(),
        }
    }
}

impl From<e::trip::Trip> for Trip {
    fn from(from: e::trip::Trip) -> Self {
        let e::trip::Trip {
            id,
            owner,
            title,
            description,
            starts_on,
            ends_on,
            start_pos,
            created_at,
            archived_at,
        } = from;
        Self {
            id: id.into(),
            owner: owner.into_string(),
            title,
            description,
            starts_on,
            ends_on,
            lat: start_pos.lat().to_deg(),
            lng: start_pos.lng().to_deg(),
            created_at: created_at.as_secs(),
            archived: archived_at.is_some(),
        }
    }
}

impl From<e::trip::TripMembership> for TripMember {
    fn from(from: e::trip::TripMembership) -> Self {
        let e::trip::TripMembership {
            trip: _trip,
            member,
            role,
            status,
            invited_at,
            responded_at,
        } = from;
        Self {
            email: member.into_string(),
            role: role.into(),
            status: status.into(),
            invited_at: invited_at.as_secs(),
            responded_at: responded_at.map(e::time::Timestamp::as_secs),
        }
    }
}

impl From<e::trip::MemberRole> for MemberRole {
    fn from(from: e::trip::MemberRole) -> Self {
        use e::trip::MemberRole::*;
        match from {
            Member => MemberRole::Member,
            Owner => MemberRole::Owner,
        }
    }
}

impl From<MemberRole> for e::trip::MemberRole {
    fn from(from: MemberRole) -> Self {
        use e::trip::MemberRole::*;
        match from {
            MemberRole::Member => Member,
            MemberRole::Owner => Owner,
        }
    }
}

impl From<e::trip::MembershipStatus> for MembershipStatus {
    fn from(from: e::trip::MembershipStatus) -> Self {
        use e::trip::MembershipStatus::*;
        match from {
            Pending => MembershipStatus::Pending,
            Accepted => MembershipStatus::Accepted,
            Declined => MembershipStatus::Declined,
        }
    }
}

impl From<MembershipStatus> for e::trip::MembershipStatus {
    fn from(from: MembershipStatus) -> Self {
        use e::trip::MembershipStatus::*;
        match from {
            MembershipStatus::Pending => Pending,
            MembershipStatus::Accepted => Accepted,
            MembershipStatus::Declined => Declined,
        }
    }
}

impl From<e::trip_place::TripPlaceStatus> for TripPlaceStatus {
    fn from(from: e::trip_place::TripPlaceStatus) -> Self {
        use e::trip_place::TripPlaceStatus::*;
        match from {
            Proposed => TripPlaceStatus::Proposed,
            Accepted => TripPlaceStatus::Accepted,
            Rejected => TripPlaceStatus::Rejected,
        }
    }
}

impl From<TripPlaceStatus> for e::trip_place::TripPlaceStatus {
    fn from(from: TripPlaceStatus) -> Self {
        use e::trip_place::TripPlaceStatus::*;
        match from {
            TripPlaceStatus::Proposed => Proposed,
            TripPlaceStatus::Accepted => Accepted,
            TripPlaceStatus::Rejected => Rejected,
        }
    }
}

impl From<e::preference::UserPreference> for Preference {
    fn from(from: e::preference::UserPreference) -> Self {
        let e::preference::UserPreference {
            user: _user,
            category,
            score,
            updated_at,
        } = from;
        Self {
            category: category.into(),
            score: score.into(),
            updated_at: updated_at.as_secs(),
        }
    }
}

impl From<e::itinerary::ItineraryItem> for ItineraryItem {
    fn from(from: e::itinerary::ItineraryItem) -> Self {
        let e::itinerary::ItineraryItem {
            place,
            order_index,
            is_fixed,
        } = from;
        Self {
            place: place.into(),
            order_index,
            is_fixed,
        }
    }
}

impl From<e::activity::AuditLogEntry> for AuditLogEntry {
    fn from(from: e::activity::AuditLogEntry) -> Self {
        let e::activity::AuditLogEntry {
            id,
            activity: e::activity::Activity { at, by },
            action,
            context,
            comment,
        } = from;
        Self {
            id: id.into(),
            at: at.as_millis(),
            by: by.map(e::email::EmailAddress::into_string),
            action,
            context,
            comment,
        }
    }
}
