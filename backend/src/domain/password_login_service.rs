//! Login service verifying submitted passwords against stored hashes.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};
use zeroize::Zeroizing;

use crate::domain::ports::{LoginService, UserPersistenceError, UserRepository};
use crate::domain::{Error, LoginCredentials, PasswordHash, PasswordHashError, Username};

const INVALID_CREDENTIALS: &str = "Invalid username or password.";

/// [`LoginService`] backed by a [`UserRepository`].
///
/// Unknown users, wrong passwords and unreadable hashes all produce the same
/// unauthorised error.
#[derive(Clone)]
pub struct PasswordLoginService<U> {
    users: Arc<U>,
}

impl<U> PasswordLoginService<U> {
    /// Create a new service over the given user repository.
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }
}

fn map_user_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } | UserPersistenceError::Duplicate { name: message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

/// Check `password` against `hash` on the blocking pool.
///
/// PBKDF2 deliberately burns CPU for every attempt, so it must not run on an
/// async worker thread.
async fn verify_off_worker(
    hash: &PasswordHash,
    password: &str,
) -> Result<Result<bool, PasswordHashError>, Error> {
    let hash = hash.clone();
    let password = Zeroizing::new(password.to_owned());
    tokio::task::spawn_blocking(move || hash.verify(&password))
        .await
        .map_err(|err| Error::internal(format!("password verification task failed: {err}")))
}

#[async_trait]
impl<U> LoginService for PasswordLoginService<U>
where
    U: UserRepository,
{
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<Username, Error> {
        let Some(user) = self
            .users
            .find_by_name(credentials.username())
            .await
            .map_err(map_user_persistence_error)?
        else {
            info!("login rejected: unknown user");
            return Err(Error::unauthorized(INVALID_CREDENTIALS));
        };

        match verify_off_worker(user.password_hash(), credentials.password()).await? {
            Ok(true) => {
                info!(user = %user.name(), "login succeeded");
                Ok(user.name().clone())
            }
            Ok(false) => {
                info!(user = %user.name(), "login rejected: password mismatch");
                Err(Error::unauthorized(INVALID_CREDENTIALS))
            }
            Err(error) => {
                warn!(user = %user.name(), %error, "stored password hash is unusable");
                Err(Error::unauthorized(INVALID_CREDENTIALS))
            }
        }
    }
}
