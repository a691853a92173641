//! Driving port for recording donations.

use async_trait::async_trait;

use crate::domain::{DonationAmountError, Donation, Donor, DonorName, Error};

/// Result of a record request that reached storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// The donation was stored.
    Recorded(Donation),
    /// The amount was rejected after the donor had been resolved.
    ///
    /// `donor` may have been created by this request; it is kept.
    InvalidAmount {
        /// Donor found or created for the submitted name.
        donor: Donor,
        /// Why the amount was rejected.
        reason: DonationAmountError,
    },
}

/// Domain use-case port for the creation form.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DonationsCommand: Send + Sync {
    /// Resolve (or create) the donor named `donor`, then store `raw_amount`
    /// against it if the amount is a positive integer.
    async fn record_donation(
        &self,
        donor: &DonorName,
        raw_amount: &str,
    ) -> Result<RecordOutcome, Error>;
}
