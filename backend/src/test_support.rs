//! Test utilities shared by unit tests (in `src/`) and integration tests (in
//! `tests/`).
//!
//! Compiled for `cfg(test)` and behind the `test-support` feature. Provides
//! in-memory adapters for the persistence ports plus session and app helpers
//! so HTTP flows can run without PostgreSQL.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use async_trait::async_trait;
use mockable::DefaultClock;

use crate::domain::ports::{
    DonationPersistenceError, DonationRepository, DonorRepository, UserPersistenceError,
    UserRepository,
};
use crate::domain::{
    Donation, DonationId, DonationService, Donor, DonorId, DonorName, NewDonation, PasswordHash,
    PasswordLoginService, User, Username, UsernameValidationError,
};
pub use crate::inbound::http::app::SESSION_COOKIE;
use crate::inbound::http::app::{build_app, session_middleware};
use crate::inbound::http::state::HttpState;

/// Build the production session middleware for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Disables the `Secure` flag for plain HTTP test requests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    session_middleware(Key::generate(), false)
}

/// Session cookie set by `res`, if any.
pub fn session_cookie<B>(res: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == SESSION_COOKIE)
        .map(Cookie::into_owned)
}

/// The server's application over `state`, with [`test_session_middleware`].
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    build_app(web::Data::new(state), test_session_middleware())
}

/// Handler state backed by the in-memory adapters and the real services.
pub fn in_memory_state(
    store: Arc<InMemoryDonationStore>,
    users: Arc<InMemoryUserRepository>,
) -> HttpState {
    let donations = Arc::new(DonationService::new(
        Arc::clone(&store),
        store,
        Arc::new(DefaultClock),
    ));
    HttpState::new(
        Arc::new(PasswordLoginService::new(users)),
        donations.clone(),
        donations,
    )
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Default)]
struct StoreState {
    donors: Vec<Donor>,
    donations: Vec<Donation>,
}

/// In-memory donor and donation storage.
///
/// Implements both [`DonorRepository`] and [`DonationRepository`] so one
/// instance can back a [`DonationService`].
#[derive(Default)]
pub struct InMemoryDonationStore {
    state: Mutex<StoreState>,
}

impl InMemoryDonationStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored donors.
    pub fn donor_count(&self) -> usize {
        lock(&self.state).donors.len()
    }

    /// Number of stored donations.
    pub fn donation_count(&self) -> usize {
        lock(&self.state).donations.len()
    }

    /// Names of stored donors in insertion order.
    pub fn donor_names(&self) -> Vec<String> {
        lock(&self.state)
            .donors
            .iter()
            .map(|donor| donor.name().to_string())
            .collect()
    }
}

fn next_id(len: usize) -> Result<i32, DonationPersistenceError> {
    i32::try_from(len)
        .ok()
        .and_then(|len| len.checked_add(1))
        .ok_or_else(|| DonationPersistenceError::query("in-memory id space exhausted"))
}

#[async_trait]
impl DonorRepository for InMemoryDonationStore {
    async fn find_by_name(
        &self,
        name: &DonorName,
    ) -> Result<Option<Donor>, DonationPersistenceError> {
        Ok(lock(&self.state)
            .donors
            .iter()
            .find(|donor| donor.name() == name)
            .cloned())
    }

    async fn find_or_create(&self, name: &DonorName) -> Result<Donor, DonationPersistenceError> {
        let mut state = lock(&self.state);
        if let Some(donor) = state.donors.iter().find(|donor| donor.name() == name) {
            return Ok(donor.clone());
        }
        let donor = Donor::new(DonorId::new(next_id(state.donors.len())?), name.clone());
        state.donors.push(donor.clone());
        Ok(donor)
    }
}

#[async_trait]
impl DonationRepository for InMemoryDonationStore {
    async fn create(
        &self,
        donor: &Donor,
        donation: &NewDonation,
    ) -> Result<Donation, DonationPersistenceError> {
        let mut state = lock(&self.state);
        if !state.donors.iter().any(|known| known.id() == donation.donor_id) {
            return Err(DonationPersistenceError::query("unknown donor"));
        }
        let stored = Donation::new(
            DonationId::new(next_id(state.donations.len())?),
            donor.clone(),
            donation.amount,
            donation.created_at,
        );
        state.donations.push(stored.clone());
        Ok(stored)
    }

    async fn list_all(&self) -> Result<Vec<Donation>, DonationPersistenceError> {
        Ok(lock(&self.state).donations.clone())
    }

    async fn list_for_donor(
        &self,
        donor: &Donor,
    ) -> Result<Vec<Donation>, DonationPersistenceError> {
        Ok(lock(&self.state)
            .donations
            .iter()
            .filter(|donation| donation.donor().id() == donor.id())
            .cloned()
            .collect())
    }
}

/// In-memory operator accounts.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    /// Empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an account, hashing `password` with a low iteration count.
    ///
    /// # Errors
    /// Returns [`UsernameValidationError`] when `name` is blank.
    pub fn with_user(self, name: &str, password: &str) -> Result<Self, UsernameValidationError> {
        let user = User::new(
            Username::new(name)?,
            PasswordHash::generate_with_rounds(password, 1_000),
        );
        lock(&self.users).insert(name.to_owned(), user);
        Ok(self)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<User>, UserPersistenceError> {
        Ok(lock(&self.users).get(name).cloned())
    }

    async fn create(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut users = lock(&self.users);
        let name = user.name().as_ref();
        if users.contains_key(name) {
            return Err(UserPersistenceError::duplicate(name));
        }
        users.insert(name.to_owned(), user.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn find_or_create_reuses_existing_donor() {
        let store = InMemoryDonationStore::new();
        let name = DonorName::new("Ada").expect("valid");
        let first = store.find_or_create(&name).await.expect("create");
        let second = store.find_or_create(&name).await.expect("reuse");
        assert_eq!(first, second);
        assert_eq!(store.donor_count(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn donations_for_unknown_donor_are_rejected() {
        let store = InMemoryDonationStore::new();
        let stranger = Donor::new(
            DonorId::new(99),
            DonorName::new("Ghost").expect("valid"),
        );
        let new = NewDonation {
            donor_id: stranger.id(),
            amount: crate::domain::DonationAmount::new(5).expect("positive"),
            created_at: Utc::now(),
        };
        assert!(store.create(&stranger, &new).await.is_err());
        assert_eq!(store.donation_count(), 0);
    }

    #[rstest]
    #[tokio::test]
    async fn duplicate_users_are_rejected() {
        let users = InMemoryUserRepository::new()
            .with_user("admin", "pw")
            .expect("valid fixture");
        let user = users
            .find_by_name("admin")
            .await
            .expect("lookup")
            .expect("present");
        assert_eq!(
            users.create(&user).await,
            Err(UserPersistenceError::duplicate("admin"))
        );
    }
}
