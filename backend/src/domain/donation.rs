//! Donations and per-donor summaries.

use std::fmt;

use chrono::{DateTime, Utc};

use super::donor::{Donor, DonorId};

const AMOUNT_MESSAGE: &str = "Donation must be a non-negative number greater than 0";

/// Validation errors returned when parsing a donation amount.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DonationAmountError {
    /// Input was not an integer.
    #[error("{AMOUNT_MESSAGE}")]
    NotANumber,
    /// Input was an integer less than or equal to zero.
    #[error("{AMOUNT_MESSAGE}")]
    NotPositive,
}

/// Positive whole donation amount.
///
/// # Examples
/// ```
/// use donations::domain::DonationAmount;
///
/// let amount = DonationAmount::parse(" 25 ").expect("positive integer");
/// assert_eq!(amount.get(), 25);
/// assert!(DonationAmount::parse("0").is_err());
/// assert!(DonationAmount::parse("ten").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DonationAmount(i64);

impl DonationAmount {
    /// Validate an integer amount.
    ///
    /// # Errors
    /// Returns [`DonationAmountError::NotPositive`] when `value <= 0`.
    pub const fn new(value: i64) -> Result<Self, DonationAmountError> {
        if value <= 0 {
            return Err(DonationAmountError::NotPositive);
        }
        Ok(Self(value))
    }

    /// Parse a form value. Surrounding whitespace is ignored.
    ///
    /// # Errors
    /// Returns [`DonationAmountError::NotANumber`] when the text is not an
    /// integer that fits in 64 bits, or [`DonationAmountError::NotPositive`].
    pub fn parse(raw: &str) -> Result<Self, DonationAmountError> {
        let value = raw
            .trim()
            .parse::<i64>()
            .map_err(|_| DonationAmountError::NotANumber)?;
        Self::new(value)
    }

    /// Raw amount.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for DonationAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Storage-assigned donation identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DonationId(i32);

impl DonationId {
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

/// A recorded donation together with its donor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Donation {
    id: DonationId,
    donor: Donor,
    amount: DonationAmount,
    created_at: DateTime<Utc>,
}

impl Donation {
    /// Build a donation from its stored parts.
    #[must_use]
    pub const fn new(
        id: DonationId,
        donor: Donor,
        amount: DonationAmount,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            donor,
            amount,
            created_at,
        }
    }

    /// Storage identifier.
    #[must_use]
    pub const fn id(&self) -> DonationId {
        self.id
    }

    /// Donor the amount is attributed to.
    #[must_use]
    pub const fn donor(&self) -> &Donor {
        &self.donor
    }

    /// Donated amount.
    #[must_use]
    pub const fn amount(&self) -> DonationAmount {
        self.amount
    }

    /// When the donation was recorded.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Insert payload for a new donation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewDonation {
    /// Donor receiving the credit.
    pub donor_id: DonorId,
    /// Validated amount.
    pub amount: DonationAmount,
    /// Recording timestamp.
    pub created_at: DateTime<Utc>,
}

/// A donor with every donation attributed to them and their running total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonorSummary {
    donor: Donor,
    donations: Vec<Donation>,
    total: i128,
}

impl DonorSummary {
    /// Summarise `donations` for `donor`.
    ///
    /// # Examples
    /// ```
    /// use chrono::Utc;
    /// use donations::domain::{
    ///     Donation, DonationAmount, DonationId, Donor, DonorId, DonorName, DonorSummary,
    /// };
    ///
    /// let donor = Donor::new(DonorId::new(1), DonorName::new("Ada").unwrap());
    /// let donations = [10, 25, 5]
    ///     .into_iter()
    ///     .enumerate()
    ///     .map(|(idx, value)| {
    ///         Donation::new(
    ///             DonationId::new(i32::try_from(idx).unwrap()),
    ///             donor.clone(),
    ///             DonationAmount::new(value).unwrap(),
    ///             Utc::now(),
    ///         )
    ///     })
    ///     .collect();
    /// let summary = DonorSummary::new(donor, donations);
    /// assert_eq!(summary.total(), 40);
    /// ```
    #[must_use]
    pub fn new(donor: Donor, donations: Vec<Donation>) -> Self {
        let total = donations
            .iter()
            .map(|donation| i128::from(donation.amount().get()))
            .sum();
        Self {
            donor,
            donations,
            total,
        }
    }

    /// Donor being summarised.
    #[must_use]
    pub const fn donor(&self) -> &Donor {
        &self.donor
    }

    /// Donations attributed to the donor, oldest first.
    #[must_use]
    pub fn donations(&self) -> &[Donation] {
        &self.donations
    }

    /// Sum of all donation amounts.
    #[must_use]
    pub const fn total(&self) -> i128 {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DonorName;
    use rstest::rstest;

    #[rstest]
    #[case("1", 1)]
    #[case("25", 25)]
    #[case("  40\n", 40)]
    #[case("+7", 7)]
    fn parses_positive_integers(#[case] raw: &str, #[case] expected: i64) {
        let amount = DonationAmount::parse(raw).expect("valid amount");
        assert_eq!(amount.get(), expected);
    }

    #[rstest]
    #[case("", DonationAmountError::NotANumber)]
    #[case("ten", DonationAmountError::NotANumber)]
    #[case("2.5", DonationAmountError::NotANumber)]
    #[case("99999999999999999999", DonationAmountError::NotANumber)]
    #[case("0", DonationAmountError::NotPositive)]
    #[case("-3", DonationAmountError::NotPositive)]
    fn rejects_invalid_amounts(#[case] raw: &str, #[case] expected: DonationAmountError) {
        assert_eq!(DonationAmount::parse(raw), Err(expected));
    }

    #[rstest]
    fn both_amount_errors_share_the_form_message() {
        assert_eq!(DonationAmountError::NotANumber.to_string(), AMOUNT_MESSAGE);
        assert_eq!(DonationAmountError::NotPositive.to_string(), AMOUNT_MESSAGE);
    }

    #[rstest]
    fn summary_of_no_donations_is_zero() {
        let donor = Donor::new(DonorId::new(3), DonorName::new("Grace").expect("valid"));
        let summary = DonorSummary::new(donor, Vec::new());
        assert_eq!(summary.total(), 0);
        assert!(summary.donations().is_empty());
    }

    #[rstest]
    fn summary_total_does_not_overflow_i64() {
        let donor = Donor::new(DonorId::new(1), DonorName::new("Big").expect("valid"));
        let amount = DonationAmount::new(i64::MAX).expect("positive");
        let donations = (0..2)
            .map(|id| Donation::new(DonationId::new(id), donor.clone(), amount, Utc::now()))
            .collect();
        let summary = DonorSummary::new(donor, donations);
        assert_eq!(summary.total(), i128::from(i64::MAX) * 2);
    }
}
