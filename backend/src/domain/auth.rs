//! Authentication primitives such as login credentials.
//!
//! Credentials are accepted as submitted. A blank username simply fails the
//! user lookup, which keeps every failure indistinguishable to the caller.

use zeroize::Zeroizing;

/// Login form values handed to the [`LoginService`](super::ports::LoginService).
///
/// # Examples
/// ```
/// use donations::domain::LoginCredentials;
///
/// let creds = LoginCredentials::new("admin", "password");
/// assert_eq!(creds.username(), "admin");
/// assert_eq!(creds.password(), "password");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Capture raw username/password inputs.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Username exactly as submitted.
    #[must_use]
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Password exactly as submitted.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl std::fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("  admin  ", " pw ")]
    #[case("", "")]
    fn values_are_not_normalised(#[case] username: &str, #[case] password: &str) {
        let creds = LoginCredentials::new(username, password);
        assert_eq!(creds.username(), username);
        assert_eq!(creds.password(), password);
    }

    #[rstest]
    fn debug_hides_password() {
        let creds = LoginCredentials::new("admin", "hunter2");
        let rendered = format!("{creds:?}");
        assert!(rendered.contains("admin"));
        assert!(!rendered.contains("hunter2"));
    }
}
