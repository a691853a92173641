//! Driving port for the listing and per-donor query pages.

use async_trait::async_trait;

use crate::domain::{Donation, DonorSummary, Error};

/// Domain use-case port for read-only donation views.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DonationsQuery: Send + Sync {
    /// Every donation with its donor, oldest first.
    async fn list_donations(&self) -> Result<Vec<Donation>, Error>;

    /// Summary for the donor named exactly `name`, or `None` when no such
    /// donor exists.
    async fn donor_summary(&self, name: &str) -> Result<Option<DonorSummary>, Error>;
}
