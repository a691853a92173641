//! Port abstraction for donation persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{Donation, Donor, NewDonation};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by donor and donation adapters.
    pub enum DonationPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "donation store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "donation store query failed: {message}",
    }
}

/// Donation storage. Rows are immutable once inserted.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DonationRepository: Send + Sync {
    /// Insert a donation for an existing donor.
    ///
    /// The returned donation carries `donor` so callers need no extra lookup.
    async fn create(
        &self,
        donor: &Donor,
        donation: &NewDonation,
    ) -> Result<Donation, DonationPersistenceError>;

    /// Every donation with its donor, oldest first.
    async fn list_all(&self) -> Result<Vec<Donation>, DonationPersistenceError>;

    /// Donations attributed to `donor`, oldest first.
    async fn list_for_donor(
        &self,
        donor: &Donor,
    ) -> Result<Vec<Donation>, DonationPersistenceError>;
}
