//! Session configuration parsing and validation.
//!
//! Reads the cookie key and `Secure` toggle from the environment through
//! [`mockable::Env`] so every branch can be exercised without touching the
//! process environment.

use actix_web::cookie::Key;
use mockable::Env;
use tracing::warn;
use zeroize::Zeroize;

const SECRET_KEY_ENV: &str = "SECRET_KEY";
const SECRET_KEY_MIN_LEN: usize = 32;
const COOKIE_SECURE_ENV: &str = "SESSION_COOKIE_SECURE";
const BOOL_EXPECTED: &str = "1|0|true|false|yes|no|y|n";

/// Build mode for session configuration validation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    /// Debug builds tolerate a missing `Secure` toggle and warn.
    Debug,
    /// Release builds require every toggle to be set explicitly.
    Release,
}

impl BuildMode {
    /// Determine the build mode from `cfg!(debug_assertions)`.
    ///
    /// # Examples
    /// ```
    /// use donations::inbound::http::session_config::BuildMode;
    ///
    /// let mode = BuildMode::from_debug_assertions();
    /// assert_eq!(mode == BuildMode::Debug, cfg!(debug_assertions));
    /// ```
    #[must_use]
    pub fn from_debug_assertions() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }

    fn is_debug(self) -> bool {
        matches!(self, Self::Debug)
    }
}

/// Session settings derived from the environment.
pub struct SessionSettings {
    /// Signing and encryption key for cookie sessions.
    pub key: Key,
    /// Whether session cookies are marked `Secure`.
    pub cookie_secure: bool,
}

/// Errors raised while validating session configuration.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SessionConfigError {
    /// A required environment variable is missing.
    #[error("missing required environment variable: {name}")]
    MissingEnv {
        /// Variable name.
        name: &'static str,
    },
    /// A variable is present but contains an invalid value.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        /// Variable name.
        name: &'static str,
        /// Rejected value.
        value: String,
        /// Accepted spellings.
        expected: &'static str,
    },
    /// The secret key is too short to derive a cookie key from.
    #[error("SECRET_KEY too short: need >= {min_len} bytes, got {length}")]
    KeyTooShort {
        /// Supplied length in bytes.
        length: usize,
        /// Required minimum.
        min_len: usize,
    },
}

/// Build session settings from environment variables and build mode.
///
/// # Errors
/// Returns [`SessionConfigError`] when `SECRET_KEY` is missing or short, or
/// when a release build lacks a valid `SESSION_COOKIE_SECURE`.
///
/// # Examples
/// ```
/// use donations::inbound::http::session_config::{BuildMode, session_settings_from_env};
/// use mockable::MockEnv;
///
/// let mut env = MockEnv::new();
/// env.expect_string().returning(|name| match name {
///     "SECRET_KEY" => Some("k".repeat(64)),
///     "SESSION_COOKIE_SECURE" => Some("1".to_owned()),
///     _ => None,
/// });
///
/// let settings = session_settings_from_env(&env, BuildMode::Release).expect("valid settings");
/// assert!(settings.cookie_secure);
/// ```
pub fn session_settings_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
) -> Result<SessionSettings, SessionConfigError> {
    let cookie_secure = cookie_secure_from_env(env, mode)?;
    let key = session_key_from_env(env)?;
    Ok(SessionSettings { key, cookie_secure })
}

fn cookie_secure_from_env<E: Env>(env: &E, mode: BuildMode) -> Result<bool, SessionConfigError> {
    match env.string(COOKIE_SECURE_ENV) {
        Some(value) => match parse_bool(&value) {
            Some(flag) => Ok(flag),
            None if mode.is_debug() => {
                warn!(value = %value, "invalid SESSION_COOKIE_SECURE; defaulting to insecure");
                Ok(false)
            }
            None => Err(SessionConfigError::InvalidEnv {
                name: COOKIE_SECURE_ENV,
                value,
                expected: BOOL_EXPECTED,
            }),
        },
        None if mode.is_debug() => {
            warn!("SESSION_COOKIE_SECURE not set; cookies will be sent over plain HTTP");
            Ok(false)
        }
        None => Err(SessionConfigError::MissingEnv {
            name: COOKIE_SECURE_ENV,
        }),
    }
}

fn session_key_from_env<E: Env>(env: &E) -> Result<Key, SessionConfigError> {
    let Some(mut secret) = env.string(SECRET_KEY_ENV) else {
        return Err(SessionConfigError::MissingEnv {
            name: SECRET_KEY_ENV,
        });
    };

    let length = secret.len();
    if length < SECRET_KEY_MIN_LEN {
        secret.zeroize();
        return Err(SessionConfigError::KeyTooShort {
            length,
            min_len: SECRET_KEY_MIN_LEN,
        });
    }

    let key = Key::derive_from(secret.as_bytes());
    secret.zeroize();
    Ok(key)
}

pub(crate) fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" => Some(true),
        "0" | "false" | "no" | "n" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for session configuration parsing.

    use super::*;
    use mockable::MockEnv;
    use rstest::rstest;
    use std::collections::HashMap;

    fn mock_env(vars: &[(&str, &str)]) -> MockEnv {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        let mut env = MockEnv::new();
        env.expect_string()
            .times(0..)
            .returning(move |key| vars.get(key).cloned());
        env
    }

    fn long_secret() -> String {
        "s".repeat(SECRET_KEY_MIN_LEN)
    }

    #[rstest]
    #[case(BuildMode::Debug)]
    #[case(BuildMode::Release)]
    fn missing_secret_key_is_rejected(#[case] mode: BuildMode) {
        let env = mock_env(&[(COOKIE_SECURE_ENV, "1")]);
        let err = session_settings_from_env(&env, mode)
            .err()
            .expect("missing key must fail");
        assert_eq!(
            err,
            SessionConfigError::MissingEnv {
                name: SECRET_KEY_ENV
            }
        );
    }

    #[rstest]
    fn short_secret_key_is_rejected() {
        let env = mock_env(&[(SECRET_KEY_ENV, "too-short"), (COOKIE_SECURE_ENV, "0")]);
        let err = session_settings_from_env(&env, BuildMode::Debug)
            .err()
            .expect("short key must fail");
        assert_eq!(
            err,
            SessionConfigError::KeyTooShort {
                length: 9,
                min_len: SECRET_KEY_MIN_LEN
            }
        );
    }

    #[rstest]
    fn same_secret_derives_same_key() {
        let secret = long_secret();
        let env = mock_env(&[(SECRET_KEY_ENV, secret.as_str()), (COOKIE_SECURE_ENV, "1")]);
        let first = session_settings_from_env(&env, BuildMode::Release).expect("valid");
        let second = session_settings_from_env(&env, BuildMode::Release).expect("valid");
        assert_eq!(first.key.master(), second.key.master());
    }

    #[rstest]
    fn debug_defaults_to_insecure_cookie() {
        let secret = long_secret();
        let env = mock_env(&[(SECRET_KEY_ENV, secret.as_str())]);
        let settings = session_settings_from_env(&env, BuildMode::Debug).expect("valid");
        assert!(!settings.cookie_secure);
    }

    #[rstest]
    fn release_requires_cookie_secure() {
        let secret = long_secret();
        let env = mock_env(&[(SECRET_KEY_ENV, secret.as_str())]);
        let err = session_settings_from_env(&env, BuildMode::Release)
            .err()
            .expect("release must require the toggle");
        assert_eq!(
            err,
            SessionConfigError::MissingEnv {
                name: COOKIE_SECURE_ENV
            }
        );
    }

    #[rstest]
    #[case(BuildMode::Debug, Ok(false))]
    #[case(
        BuildMode::Release,
        Err(SessionConfigError::InvalidEnv {
            name: COOKIE_SECURE_ENV,
            value: "maybe".to_owned(),
            expected: BOOL_EXPECTED,
        })
    )]
    fn invalid_cookie_secure_depends_on_mode(
        #[case] mode: BuildMode,
        #[case] expected: Result<bool, SessionConfigError>,
    ) {
        let secret = long_secret();
        let env = mock_env(&[(SECRET_KEY_ENV, secret.as_str()), (COOKIE_SECURE_ENV, "maybe")]);
        let result = session_settings_from_env(&env, mode).map(|settings| settings.cookie_secure);
        assert_eq!(result, expected);
    }

    #[rstest]
    #[case("1", Some(true))]
    #[case("YES", Some(true))]
    #[case(" y ", Some(true))]
    #[case("false", Some(false))]
    #[case("N", Some(false))]
    #[case("", None)]
    #[case("on", None)]
    fn parse_bool_accepts_documented_spellings(#[case] raw: &str, #[case] expected: Option<bool>) {
        assert_eq!(parse_bool(raw), expected);
    }
}
