///////////////////////////////////////////////////////////////////////
// Users
///////////////////////////////////////////////////////////////////////

table! {
    users (id) {
        id -> BigInt,
        email -> Text,
        email_confirmed -> Bool,
        password -> Text,
        display_name -> Nullable<Text>,
        role -> SmallInt,
        banned_at -> Nullable<BigInt>,
    }
}

table! {
    user_tokens (id) {
        id -> BigInt,
        user_id -> BigInt,
        nonce -> Text,
        expires_at -> BigInt,
    }
}

joinable!(user_tokens -> users (user_id));

table! {
    external_identities (id) {
        id -> BigInt,
        user_id -> BigInt,
        provider -> Text,
        external_id -> Text,
        linked_at -> BigInt,
    }
}

joinable!(external_identities -> users (user_id));

///////////////////////////////////////////////////////////////////////
// Place catalog
///////////////////////////////////////////////////////////////////////

table! {
    categories (rowid) {
        rowid -> BigInt,
        id -> Text,
        slug -> Text,
        icon -> Nullable<Text>,
    }
}

table! {
    category_translations (category_rowid, locale) {
        category_rowid -> BigInt,
        locale -> Text,
        name -> Text,
    }
}

joinable!(category_translations -> categories (category_rowid));

table! {
    places (rowid) {
        rowid -> BigInt,
        id -> Text,
        created_ms -> BigInt,
        created_by -> Nullable<BigInt>,
        title -> Text,
        description -> Text,
        lat -> Double,
        lng -> Double,
        street -> Nullable<Text>,
        zip -> Nullable<Text>,
        city -> Nullable<Text>,
        country -> Nullable<Text>,
        category_rowid -> BigInt,
        rating -> Nullable<Double>,
        rating_count -> BigInt,
        image_url -> Nullable<Text>,
        archived_at -> Nullable<BigInt>,
    }
}

joinable!(places -> categories (category_rowid));
joinable!(places -> users (created_by));

///////////////////////////////////////////////////////////////////////
// Trips
///////////////////////////////////////////////////////////////////////

table! {
    trips (rowid) {
        rowid -> BigInt,
        id -> Text,
        owner_id -> BigInt,
        title -> Text,
        description -> Nullable<Text>,
        starts_on -> Text,
        ends_on -> Text,
        lat -> Double,
        lng -> Double,
        created_at -> BigInt,
        archived_at -> Nullable<BigInt>,
    }
}

joinable!(trips -> users (owner_id));

table! {
    trip_members (trip_rowid, user_id) {
        trip_rowid -> BigInt,
        user_id -> BigInt,
        role -> SmallInt,
        status -> SmallInt,
        invited_at -> BigInt,
        responded_at -> Nullable<BigInt>,
    }
}

joinable!(trip_members -> trips (trip_rowid));
joinable!(trip_members -> users (user_id));

table! {
    trip_places (trip_rowid, place_rowid) {
        trip_rowid -> BigInt,
        place_rowid -> BigInt,
        status -> SmallInt,
        is_fixed -> Bool,
        day -> Nullable<Integer>,
        order_index -> Nullable<Integer>,
        note -> Nullable<Text>,
        proposed_by -> BigInt,
        created_at -> BigInt,
    }
}

joinable!(trip_places -> trips (trip_rowid));
joinable!(trip_places -> places (place_rowid));
joinable!(trip_places -> users (proposed_by));

table! {
    trip_place_votes (trip_rowid, place_rowid, user_id) {
        trip_rowid -> BigInt,
        place_rowid -> BigInt,
        user_id -> BigInt,
        score -> SmallInt,
        cast_at -> BigInt,
    }
}

joinable!(trip_place_votes -> trips (trip_rowid));
joinable!(trip_place_votes -> places (place_rowid));
joinable!(trip_place_votes -> users (user_id));

table! {
    user_preferences (user_id, category_rowid) {
        user_id -> BigInt,
        category_rowid -> BigInt,
        score -> SmallInt,
        updated_at -> BigInt,
    }
}

joinable!(user_preferences -> users (user_id));
joinable!(user_preferences -> categories (category_rowid));

///////////////////////////////////////////////////////////////////////
// Cached itineraries
///////////////////////////////////////////////////////////////////////

table! {
    trip_itineraries (trip_rowid) {
        trip_rowid -> BigInt,
        generated_at -> BigInt,
    }
}

joinable!(trip_itineraries -> trips (trip_rowid));

table! {
    trip_itinerary_items (rowid) {
        rowid -> BigInt,
        trip_rowid -> BigInt,
        day -> Integer,
        order_index -> Integer,
        place_rowid -> BigInt,
        is_fixed -> Bool,
    }
}

joinable!(trip_itinerary_items -> trip_itineraries (trip_rowid));
joinable!(trip_itinerary_items -> places (place_rowid));

///////////////////////////////////////////////////////////////////////
// Audit trail
///////////////////////////////////////////////////////////////////////

table! {
    audit_log (rowid) {
        rowid -> BigInt,
        id -> Text,
        at_ms -> BigInt,
        created_by -> Nullable<Text>,
        action -> Text,
        context -> Nullable<Text>,
        comment -> Nullable<Text>,
    }
}

///////////////////////////////////////////////////////////////////////

allow_tables_to_appear_in_same_query!(
    audit_log,
    categories,
    category_translations,
    external_identities,
    places,
    trips,
    trip_itineraries,
    trip_itinerary_items,
    trip_members,
    trip_places,
    trip_place_votes,
    users,
    user_preferences,
    user_tokens,
);
