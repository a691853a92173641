//! Donor identity and name validation.
//!
//! Donor names are natural lookup keys: they are stored and compared exactly
//! as submitted, with no trimming or case folding.

use std::fmt;

/// Validation errors returned by [`DonorName::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DonorValidationError {
    /// Name was empty or consisted only of whitespace.
    #[error("Donor cannot be empty or whitespace.")]
    BlankName,
}

/// Donor name as submitted by the operator.
///
/// ## Invariants
/// - Contains at least one non-whitespace character.
/// - Preserves the caller's original text, surrounding whitespace included.
///
/// # Examples
/// ```
/// use donations::domain::DonorName;
///
/// let name = DonorName::new(" Ada ").expect("non-blank");
/// assert_eq!(name.as_ref(), " Ada ");
/// assert!(DonorName::new("\t ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DonorName(String);

impl DonorName {
    /// Validate and wrap a donor name.
    ///
    /// # Errors
    /// Returns [`DonorValidationError::BlankName`] for empty or whitespace-only
    /// input.
    pub fn new(raw: impl Into<String>) -> Result<Self, DonorValidationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(DonorValidationError::BlankName);
        }
        Ok(Self(raw))
    }
}

impl AsRef<str> for DonorName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for DonorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<DonorName> for String {
    fn from(value: DonorName) -> Self {
        value.0
    }
}

/// Storage-assigned donor identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DonorId(i32);

impl DonorId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for DonorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named entity that can make donations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Donor {
    id: DonorId,
    name: DonorName,
}

impl Donor {
    /// Build a donor from its stored parts.
    #[must_use]
    pub const fn new(id: DonorId, name: DonorName) -> Self {
        Self { id, name }
    }

    /// Storage identifier.
    #[must_use]
    pub const fn id(&self) -> DonorId {
        self.id
    }

    /// Donor name.
    #[must_use]
    pub const fn name(&self) -> &DonorName {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case(" ")]
    #[case("\t\n")]
    #[case("\u{2003}")]
    fn blank_names_are_rejected(#[case] raw: &str) {
        assert_eq!(DonorName::new(raw), Err(DonorValidationError::BlankName));
    }

    #[rstest]
    #[case("Ada Lovelace")]
    #[case("  padded  ")]
    #[case("lowercase")]
    fn names_are_kept_verbatim(#[case] raw: &str) {
        let name = DonorName::new(raw).expect("valid donor name");
        assert_eq!(name.as_ref(), raw);
    }

    #[rstest]
    fn names_compare_case_sensitively() {
        let upper = DonorName::new("Ada").expect("valid");
        let lower = DonorName::new("ada").expect("valid");
        assert_ne!(upper, lower);
    }
}
