//! Port abstraction for user persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::User;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// A user with the same name already exists.
        Duplicate { name: String } => "user already exists: {name}",
    }
}

/// Operator account storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch a user by exact name.
    async fn find_by_name(&self, name: &str) -> Result<Option<User>, UserPersistenceError>;

    /// Insert a new user, failing with `Duplicate` when the name is taken.
    async fn create(&self, user: &User) -> Result<(), UserPersistenceError>;
}
