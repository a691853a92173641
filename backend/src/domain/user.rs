//! Operator accounts allowed to record donations.

use std::fmt;

use super::password::PasswordHash;

/// Validation errors returned by [`Username::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsernameValidationError {
    /// Name was empty or whitespace-only.
    #[error("username must not be empty")]
    Empty,
}

/// Unique login name of an operator.
///
/// Names are matched exactly; no trimming or case folding is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Validate and wrap a username.
    ///
    /// # Errors
    /// Returns [`UsernameValidationError::Empty`] for blank input.
    pub fn new(raw: impl Into<String>) -> Result<Self, UsernameValidationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(UsernameValidationError::Empty);
        }
        Ok(Self(raw))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stored operator account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    name: Username,
    password_hash: PasswordHash,
}

impl User {
    /// Build a user from its stored parts.
    #[must_use]
    pub const fn new(name: Username, password_hash: PasswordHash) -> Self {
        Self {
            name,
            password_hash,
        }
    }

    /// Login name.
    #[must_use]
    pub const fn name(&self) -> &Username {
        &self.name
    }

    /// Salted password hash.
    #[must_use]
    pub const fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }
}
