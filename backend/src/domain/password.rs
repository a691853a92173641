//! Salted PBKDF2-SHA256 password hashes.
//!
//! Hashes use the modular crypt layout produced by passlib's
//! `pbkdf2_sha256` handler so existing user rows verify unchanged:
//!
//! ```text
//! $pbkdf2-sha256$<rounds>$<salt>$<checksum>
//! ```
//!
//! Salt and checksum are "adapted base64": the standard alphabet with `.` in
//! place of `+` and no padding.

use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD_NO_PAD;
use rand::RngCore;
use rand::rngs::OsRng;
use sha2::Sha256;
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

const SCHEME: &str = "pbkdf2-sha256";
/// Iteration count used for newly generated hashes.
pub const DEFAULT_ROUNDS: u32 = 29_000;
const SALT_LEN: usize = 16;
const CHECKSUM_LEN: usize = 32;

/// Reasons a stored hash cannot be used for verification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PasswordHashError {
    /// The string does not have the `$scheme$rounds$salt$checksum` shape.
    #[error("malformed password hash")]
    Malformed,
    /// The scheme identifier is not `pbkdf2-sha256`.
    #[error("unsupported password hash scheme: {scheme}")]
    UnsupportedScheme {
        /// Scheme found in the stored hash.
        scheme: String,
    },
    /// The rounds field is not a positive integer.
    #[error("invalid rounds in password hash: {value}")]
    InvalidRounds {
        /// Raw rounds field.
        value: String,
    },
    /// Salt or checksum is not valid adapted base64.
    #[error("invalid {field} encoding in password hash")]
    InvalidEncoding {
        /// Which field failed to decode.
        field: &'static str,
    },
}

/// Stored password hash.
///
/// `Debug` output is redacted so hashes never reach logs.
///
/// # Examples
/// ```
/// use donations::domain::PasswordHash;
///
/// let hash = PasswordHash::generate_with_rounds("s3cret", 1_000);
/// assert!(hash.verify("s3cret").expect("well-formed hash"));
/// assert!(!hash.verify("guess").expect("well-formed hash"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap a hash loaded from storage. The format is checked on verification.
    pub fn from_stored(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Hash `password` with a fresh random salt and [`DEFAULT_ROUNDS`].
    #[must_use]
    pub fn generate(password: &str) -> Self {
        Self::generate_with_rounds(password, DEFAULT_ROUNDS)
    }

    /// Hash `password` with a fresh random salt and the given iteration count.
    #[must_use]
    pub fn generate_with_rounds(password: &str, rounds: u32) -> Self {
        let mut salt = [0_u8; SALT_LEN];
        OsRng.fill_bytes(&mut salt);
        Self::from_parts(password, &salt, rounds.max(1))
    }

    fn from_parts(password: &str, salt: &[u8], rounds: u32) -> Self {
        let mut checksum = Zeroizing::new([0_u8; CHECKSUM_LEN]);
        pbkdf2::pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, rounds, checksum.as_mut_slice());
        Self(format!(
            "${SCHEME}${rounds}${}${}",
            encode_ab64(salt),
            encode_ab64(checksum.as_slice())
        ))
    }

    /// Check `password` against this hash in constant time.
    ///
    /// # Errors
    /// Returns [`PasswordHashError`] when the stored hash cannot be parsed.
    pub fn verify(&self, password: &str) -> Result<bool, PasswordHashError> {
        let parsed = ParsedHash::parse(&self.0)?;
        let mut derived = Zeroizing::new(vec![0_u8; parsed.checksum.len()]);
        pbkdf2::pbkdf2_hmac::<Sha256>(
            password.as_bytes(),
            &parsed.salt,
            parsed.rounds,
            derived.as_mut_slice(),
        );
        Ok(bool::from(derived.as_slice().ct_eq(&parsed.checksum)))
    }

    /// Encoded hash suitable for storage.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}

struct ParsedHash {
    rounds: u32,
    salt: Vec<u8>,
    checksum: Vec<u8>,
}

impl ParsedHash {
    fn parse(encoded: &str) -> Result<Self, PasswordHashError> {
        let mut fields = encoded.split('$');
        let (Some(""), Some(scheme), Some(rounds), Some(salt), Some(checksum), None) = (
            fields.next(),
            fields.next(),
            fields.next(),
            fields.next(),
            fields.next(),
            fields.next(),
        ) else {
            return Err(PasswordHashError::Malformed);
        };

        if scheme != SCHEME {
            return Err(PasswordHashError::UnsupportedScheme {
                scheme: scheme.to_owned(),
            });
        }

        let rounds = match rounds.parse::<u32>() {
            Ok(value) if value > 0 => value,
            _ => {
                return Err(PasswordHashError::InvalidRounds {
                    value: rounds.to_owned(),
                });
            }
        };

        let salt = decode_ab64(salt)
            .ok_or(PasswordHashError::InvalidEncoding { field: "salt" })?;
        let checksum = decode_ab64(checksum)
            .filter(|bytes| !bytes.is_empty())
            .ok_or(PasswordHashError::InvalidEncoding { field: "checksum" })?;

        Ok(Self {
            rounds,
            salt,
            checksum,
        })
    }
}

fn encode_ab64(bytes: &[u8]) -> String {
    STANDARD_NO_PAD.encode(bytes).replace('+', ".")
}

fn decode_ab64(text: &str) -> Option<Vec<u8>> {
    STANDARD_NO_PAD.decode(text.replace('.', "+")).ok()
}
