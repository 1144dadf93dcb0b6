use std::{cell::RefCell, result};

use super::prelude::*;
use crate::RepoError;


type RepoResult<T> = result::Result<T, RepoError>;

// Lookup key of an entity within the mock tables. Pivot rows use
// composite keys.
trait Key {
    type Key: PartialEq;
    fn key(&self) -> Self::Key;
}

impl Key for User {
    type Key = EmailAddress;
    fn key(&self) -> Self::Key {
        self.email.clone()
    }
}

impl Key for UserToken {
    type Key = EmailAddress;
    fn key(&self) -> Self::Key {
        self.email_nonce.email.clone()
    }
}

impl Key for ExternalIdentity {
    type Key = (OAuthProvider, String);
    fn key(&self) -> Self::Key {
        (self.provider, self.external_id.clone())
    }
}

impl Key for Category {
    type Key = Id;
    fn key(&self) -> Self::Key {
        self.id.clone()
    }
}

impl Key for Place {
    type Key = Id;
    fn key(&self) -> Self::Key {
        self.id.clone()
    }
}

impl Key for Trip {
    type Key = Id;
    fn key(&self) -> Self::Key {
        self.id.clone()
    }
}

impl Key for TripMembership {
    type Key = (Id, EmailAddress);
    fn key(&self) -> Self::Key {
        (self.trip.clone(), self.member.clone())
    }
}

impl Key for TripPlace {
    type Key = (Id, Id);
    fn key(&self) -> Self::Key {
        (self.trip.clone(), self.place.clone())
    }
}

impl Key for PlaceVote {
    type Key = (Id, Id, EmailAddress);
    fn key(&self) -> Self::Key {
        (self.trip.clone(), self.place.clone(), self.voter.clone())
    }
}

impl Key for UserPreference {
    type Key = (EmailAddress, Id);
    fn key(&self) -> Self::Key {
        (self.user.clone(), self.category.clone())
    }
}

impl Key for TripItinerary {
    type Key = Id;
    fn key(&self) -> Self::Key {
        self.trip.clone()
    }
}

impl Key for AuditLogEntry {
    type Key = Id;
    fn key(&self) -> Self::Key {
        self.id.clone()
    }
}

fn get<T: Clone + Key>(objects: &[T], key: &T::Key) -> RepoResult<T> {
    objects
        .iter()
        .find(|x| x.key() == *key)
        .cloned()
        .ok_or(RepoError::NotFound)
}

fn create<T: Key>(objects: &mut Vec<T>, e: T) -> RepoResult<()> {
    if objects.iter().any(|x| x.key() == e.key()) {
        return Err(RepoError::AlreadyExists);
    }
    objects.push(e);
    Ok(())
}

fn update<T: Clone + Key>(objects: &mut [T], e: &T) -> RepoResult<()> {
    if let Some(pos) = objects.iter().position(|x| x.key() == e.key()) {
        objects[pos] = e.clone();
        Ok(())
    } else {
        Err(RepoError::NotFound)
    }
}

fn delete<T: Key>(objects: &mut Vec<T>, key: &T::Key) -> RepoResult<()> {
    if let Some(pos) = objects.iter().position(|x| x.key() == *key) {
        objects.remove(pos);
        Ok(())
    } else {
        Err(RepoError::NotFound)
    }
}

fn upsert<T: Clone + Key>(objects: &mut Vec<T>, e: &T) {
    if update(objects, e).is_err() {
        objects.push(e.clone());
    }
}

fn paginate<T>(objects: Vec<T>, pagination: &Pagination) -> Vec<T> {
    let offset = pagination.offset.unwrap_or(0) as usize;
    let limit = pagination.limit.map(|l| l as usize).unwrap_or(usize::MAX);
    objects.into_iter().skip(offset).take(limit).collect()
}

#[derive(Default)]
pub struct MockDb {
    pub users: RefCell<Vec<User>>,
    pub user_tokens: RefCell<Vec<UserToken>>,
    pub identities: RefCell<Vec<ExternalIdentity>>,
    pub categories: RefCell<Vec<Category>>,
    pub places: RefCell<Vec<Place>>,
    pub trips: RefCell<Vec<Trip>>,
    pub memberships: RefCell<Vec<TripMembership>>,
    pub trip_places: RefCell<Vec<TripPlace>>,
    pub votes: RefCell<Vec<PlaceVote>>,
    pub preferences: RefCell<Vec<UserPreference>>,
    pub itineraries: RefCell<Vec<TripItinerary>>,
    pub audit_log: RefCell<Vec<AuditLogEntry>>,
}

impl UserRepo for MockDb {
    fn create_user(&self, user: &User) -> RepoResult<()> {
        create(&mut self.users.borrow_mut(), user.clone())
    }

    fn update_user(&self, user: &User) -> RepoResult<()> {
        update(&mut self.users.borrow_mut(), user)
    }

    fn delete_user_by_email(&self, email: &EmailAddress) -> RepoResult<()> {
        delete(&mut self.users.borrow_mut(), email)
    }

    fn all_users(&self) -> RepoResult<Vec<User>> {
        Ok(self.users.borrow().clone())
    }

    fn count_users(&self) -> RepoResult<usize> {
        Ok(self.users.borrow().len())
    }

    fn get_user_by_email(&self, email: &EmailAddress) -> RepoResult<User> {
        get(&self.users.borrow(), email)
    }

    fn try_get_user_by_email(&self, email: &EmailAddress) -> RepoResult<Option<User>> {
        Ok(get(&self.users.borrow(), email).ok())
    }
}

impl UserTokenRepo for MockDb {
    fn replace_user_token(&self, user_token: UserToken) -> RepoResult<EmailNonce> {
        let email_nonce = user_token.email_nonce.clone();
        upsert(&mut self.user_tokens.borrow_mut(), &user_token);
        Ok(email_nonce)
    }

    fn consume_user_token(&self, email_nonce: &EmailNonce) -> RepoResult<UserToken> {
        let mut tokens = self.user_tokens.borrow_mut();
        let pos = tokens
            .iter()
            .position(|t| t.email_nonce == *email_nonce)
            .ok_or(RepoError::NotFound)?;
        Ok(tokens.remove(pos))
    }

    fn delete_expired_user_tokens(&self, expired_before: Timestamp) -> RepoResult<usize> {
        let mut tokens = self.user_tokens.borrow_mut();
        let before = tokens.len();
        tokens.retain(|t| t.expires_at >= expired_before);
        Ok(before - tokens.len())
    }

    fn get_user_token_by_email(&self, email: &EmailAddress) -> RepoResult<UserToken> {
        get(&self.user_tokens.borrow(), email)
    }
}

impl IdentityRepo for MockDb {
    fn create_identity(&self, identity: &ExternalIdentity) -> RepoResult<()> {
        create(&mut self.identities.borrow_mut(), identity.clone())
    }

    fn try_get_identity(
        &self,
        provider: OAuthProvider,
        external_id: &str,
    ) -> RepoResult<Option<ExternalIdentity>> {
        let key = (provider, external_id.to_string());
        Ok(get(&self.identities.borrow(), &key).ok())
    }

    fn get_identities_by_email(&self, email: &EmailAddress) -> RepoResult<Vec<ExternalIdentity>> {
        Ok(self
            .identities
            .borrow()
            .iter()
            .filter(|i| i.email == *email)
            .cloned()
            .collect())
    }

    fn delete_identities(&self, provider: OAuthProvider, external_id: &str) -> RepoResult<usize> {
        let mut identities = self.identities.borrow_mut();
        let before = identities.len();
        identities.retain(|i| !(i.provider == provider && i.external_id == external_id));
        Ok(before - identities.len())
    }

    fn delete_identities_by_email(&self, email: &EmailAddress) -> RepoResult<usize> {
        let mut identities = self.identities.borrow_mut();
        let before = identities.len();
        identities.retain(|i| i.email != *email);
        Ok(before - identities.len())
    }
}

impl CategoryRepo for MockDb {
    fn create_category(&self, category: &Category) -> RepoResult<()> {
        create(&mut self.categories.borrow_mut(), category.clone())
    }

    fn all_categories(&self) -> RepoResult<Vec<Category>> {
        Ok(self.categories.borrow().clone())
    }

    fn get_category(&self, id: &str) -> RepoResult<Category> {
        get(&self.categories.borrow(), &id.into())
    }

    fn try_get_category_by_slug(&self, slug: &str) -> RepoResult<Option<Category>> {
        Ok(self
            .categories
            .borrow()
            .iter()
            .find(|c| c.slug == slug)
            .cloned())
    }
}

impl PlaceRepo for MockDb {
    fn create_place(&self, place: &Place) -> RepoResult<()> {
        create(&mut self.places.borrow_mut(), place.clone())
    }

    fn update_place(&self, place: &Place) -> RepoResult<()> {
        update(&mut self.places.borrow_mut(), place)
    }

    // Archived places stay resolvable by id.
    fn get_place(&self, id: &str) -> RepoResult<Place> {
        get(&self.places.borrow(), &id.into())
    }

    fn get_places(&self, ids: &[&str]) -> RepoResult<Vec<Place>> {
        Ok(self
            .places
            .borrow()
            .iter()
            .filter(|p| ids.iter().any(|id| p.id.as_str() == *id))
            .cloned()
            .collect())
    }

    fn count_places(&self) -> RepoResult<usize> {
        Ok(self
            .places
            .borrow()
            .iter()
            .filter(|p| !p.is_archived())
            .count())
    }

    fn search_places(
        &self,
        params: &PlaceSearchParams,
        pagination: &Pagination,
    ) -> RepoResult<Vec<Place>> {
        let text = params.text.as_deref().map(str::to_lowercase);
        let found = self
            .places
            .borrow()
            .iter()
            .filter(|p| params.include_archived || !p.is_archived())
            .filter(|p| params.categories.is_empty() || params.categories.contains(&p.category))
            .filter(|p| match &text {
                Some(t) => {
                    p.title.to_lowercase().contains(t) || p.description.to_lowercase().contains(t)
                }
                None => true,
            })
            .cloned()
            .collect();
        Ok(paginate(found, pagination))
    }

    fn find_places_near(
        &self,
        center: MapPoint,
        radius: Distance,
        categories: &[Id],
        pagination: &Pagination,
    ) -> RepoResult<Vec<(Place, Distance)>> {
        let mut found: Vec<_> = self
            .places
            .borrow()
            .iter()
            .filter(|p| !p.is_archived())
            .filter(|p| categories.is_empty() || categories.contains(&p.category))
            .map(|p| (p.clone(), center.distance(p.pos())))
            .filter(|(_, distance)| *distance <= radius)
            .collect();
        found.sort_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap());
        Ok(paginate(found, pagination))
    }
}

impl TripRepo for MockDb {
    fn create_trip(&self, trip: &Trip) -> RepoResult<()> {
        create(&mut self.trips.borrow_mut(), trip.clone())
    }

    fn update_trip(&self, trip: &Trip) -> RepoResult<()> {
        update(&mut self.trips.borrow_mut(), trip)
    }

    fn get_trip(&self, id: &str) -> RepoResult<Trip> {
        get(&self.trips.borrow(), &id.into())
    }

    fn count_trips(&self) -> RepoResult<usize> {
        Ok(self.trips.borrow().len())
    }

    fn trips_of_user(&self, user: &EmailAddress) -> RepoResult<Vec<Trip>> {
        let memberships = self.memberships.borrow();
        let mut trips: Vec<_> = self
            .trips
            .borrow()
            .iter()
            .filter(|t| {
                t.owner == *user
                    || memberships.iter().any(|m| {
                        m.trip == t.id
                            && m.member == *user
                            && m.status != MembershipStatus::Declined
                    })
            })
            .cloned()
            .collect();
        trips.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(trips)
    }
}

impl MembershipRepo for MockDb {
    fn create_membership(&self, membership: &TripMembership) -> RepoResult<()> {
        create(&mut self.memberships.borrow_mut(), membership.clone())
    }

    fn update_membership(&self, membership: &TripMembership) -> RepoResult<()> {
        update(&mut self.memberships.borrow_mut(), membership)
    }

    fn delete_membership(&self, trip: &Id, member: &EmailAddress) -> RepoResult<()> {
        let key = (trip.clone(), member.clone());
        delete(&mut self.memberships.borrow_mut(), &key)
    }

    fn get_membership(&self, trip: &Id, member: &EmailAddress) -> RepoResult<TripMembership> {
        let key = (trip.clone(), member.clone());
        get(&self.memberships.borrow(), &key)
    }

    fn try_get_membership(
        &self,
        trip: &Id,
        member: &EmailAddress,
    ) -> RepoResult<Option<TripMembership>> {
        Ok(self.get_membership(trip, member).ok())
    }

    fn memberships_of_trip(&self, trip: &Id) -> RepoResult<Vec<TripMembership>> {
        Ok(self
            .memberships
            .borrow()
            .iter()
            .filter(|m| m.trip == *trip)
            .cloned()
            .collect())
    }
}

impl TripPlaceRepo for MockDb {
    fn create_trip_place(&self, trip_place: &TripPlace) -> RepoResult<()> {
        create(&mut self.trip_places.borrow_mut(), trip_place.clone())
    }

    fn update_trip_place(&self, trip_place: &TripPlace) -> RepoResult<()> {
        update(&mut self.trip_places.borrow_mut(), trip_place)
    }

    fn delete_trip_place(&self, trip: &Id, place: &Id) -> RepoResult<()> {
        let key = (trip.clone(), place.clone());
        delete(&mut self.trip_places.borrow_mut(), &key)
    }

    fn get_trip_place(&self, trip: &Id, place: &Id) -> RepoResult<TripPlace> {
        let key = (trip.clone(), place.clone());
        get(&self.trip_places.borrow(), &key)
    }

    fn try_get_trip_place(&self, trip: &Id, place: &Id) -> RepoResult<Option<TripPlace>> {
        Ok(self.get_trip_place(trip, place).ok())
    }

    fn trip_places(&self, trip: &Id) -> RepoResult<Vec<TripPlace>> {
        Ok(self
            .trip_places
            .borrow()
            .iter()
            .filter(|tp| tp.trip == *trip)
            .cloned()
            .collect())
    }

    fn place_ids_of_trip(&self, trip: &Id) -> RepoResult<Vec<Id>> {
        Ok(self
            .trip_places
            .borrow()
            .iter()
            .filter(|tp| tp.trip == *trip)
            .map(|tp| tp.place.clone())
            .collect())
    }

    fn reorder_trip_places(&self, trip: &Id, slots: &[TripPlaceSlot]) -> RepoResult<usize> {
        let mut trip_places = self.trip_places.borrow_mut();
        // All-or-nothing, like the transactional SQL implementation.
        for slot in slots {
            if !trip_places
                .iter()
                .any(|tp| tp.trip == *trip && tp.place == slot.place)
            {
                return Err(RepoError::NotFound);
            }
        }
        for slot in slots {
            let tp = trip_places
                .iter_mut()
                .find(|tp| tp.trip == *trip && tp.place == slot.place)
                .expect("attached trip place");
            tp.day = slot.day;
            tp.order_index = slot.order_index;
        }
        Ok(slots.len())
    }
}

impl VoteRepo for MockDb {
    fn upsert_vote(&self, vote: &PlaceVote) -> RepoResult<()> {
        upsert(&mut self.votes.borrow_mut(), vote);
        Ok(())
    }

    fn delete_votes_for_place(&self, trip: &Id, place: &Id) -> RepoResult<usize> {
        let mut votes = self.votes.borrow_mut();
        let before = votes.len();
        votes.retain(|v| !(v.trip == *trip && v.place == *place));
        Ok(before - votes.len())
    }

    fn votes_of_trip(&self, trip: &Id) -> RepoResult<Vec<PlaceVote>> {
        Ok(self
            .votes
            .borrow()
            .iter()
            .filter(|v| v.trip == *trip)
            .cloned()
            .collect())
    }

    fn votes_for_place(&self, trip: &Id, place: &Id) -> RepoResult<Vec<PlaceVote>> {
        Ok(self
            .votes
            .borrow()
            .iter()
            .filter(|v| v.trip == *trip && v.place == *place)
            .cloned()
            .collect())
    }
}

impl PreferenceRepo for MockDb {
    fn upsert_preference(&self, preference: &UserPreference) -> RepoResult<()> {
        upsert(&mut self.preferences.borrow_mut(), preference);
        Ok(())
    }

    fn preferences_of_user(&self, user: &EmailAddress) -> RepoResult<Vec<UserPreference>> {
        Ok(self
            .preferences
            .borrow()
            .iter()
            .filter(|p| p.user == *user)
            .cloned()
            .collect())
    }

    fn preferences_of_users(&self, users: &[EmailAddress]) -> RepoResult<Vec<UserPreference>> {
        Ok(self
            .preferences
            .borrow()
            .iter()
            .filter(|p| users.contains(&p.user))
            .cloned()
            .collect())
    }
}

impl ItineraryRepo for MockDb {
    fn save_itinerary(&self, itinerary: &TripItinerary) -> RepoResult<()> {
        upsert(&mut self.itineraries.borrow_mut(), itinerary);
        Ok(())
    }

    fn try_get_itinerary(&self, trip: &Id) -> RepoResult<Option<TripItinerary>> {
        Ok(get(&self.itineraries.borrow(), trip).ok())
    }

    fn delete_itinerary(&self, trip: &Id) -> RepoResult<()> {
        self.itineraries.borrow_mut().retain(|i| i.trip != *trip);
        Ok(())
    }
}

impl AuditLogRepo for MockDb {
    fn log_audit_entry(&self, entry: &AuditLogEntry) -> RepoResult<()> {
        create(&mut self.audit_log.borrow_mut(), entry.clone())
    }

    fn audit_log_entries(
        &self,
        query: &AuditLogQuery,
        pagination: &Pagination,
    ) -> RepoResult<Vec<AuditLogEntry>> {
        let mut entries: Vec<_> = self
            .audit_log
            .borrow()
            .iter()
            .filter(|e| query.since.map_or(true, |since| e.activity.at >= since))
            .filter(|e| query.until.map_or(true, |until| e.activity.at <= until))
            .filter(|e| {
                query
                    .action_prefix
                    .as_deref()
                    .map_or(true, |prefix| e.action.starts_with(prefix))
            })
            .filter(|e| {
                query
                    .by
                    .as_ref()
                    .map_or(true, |by| e.activity.by.as_ref() == Some(by))
            })
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.activity.at.cmp(&a.activity.at));
        Ok(paginate(entries, pagination))
    }

    fn try_get_audit_log_entry(&self, id: &Id) -> RepoResult<Option<AuditLogEntry>> {
        Ok(get(&self.audit_log.borrow(), id).ok())
    }

    fn count_audit_log_entries(&self) -> RepoResult<usize> {
        Ok(self.audit_log.borrow().len())
    }
}
