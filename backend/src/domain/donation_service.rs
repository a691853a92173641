//! Donation domain services.
//!
//! Implements the creation and query driving ports on top of the donor and
//! donation repositories.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, info};

use crate::domain::ports::{
    DonationPersistenceError, DonationRepository, DonationsCommand, DonationsQuery,
    DonorRepository, RecordOutcome,
};
use crate::domain::{Donation, DonationAmount, DonorName, DonorSummary, Error, NewDonation};

/// Donation service implementing [`DonationsCommand`] and [`DonationsQuery`].
#[derive(Clone)]
pub struct DonationService<D, N> {
    donors: Arc<D>,
    donations: Arc<N>,
    clock: Arc<dyn Clock>,
}

impl<D, N> DonationService<D, N> {
    /// Create a new service with the given repositories and clock.
    pub fn new(donors: Arc<D>, donations: Arc<N>, clock: Arc<dyn Clock>) -> Self {
        Self {
            donors,
            donations,
            clock,
        }
    }
}

fn map_persistence_error(error: DonationPersistenceError) -> Error {
    match error {
        DonationPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("donation store unavailable: {message}"))
        }
        DonationPersistenceError::Query { message } => {
            Error::internal(format!("donation store error: {message}"))
        }
    }
}

#[async_trait]
impl<D, N> DonationsCommand for DonationService<D, N>
where
    D: DonorRepository,
    N: DonationRepository,
{
    async fn record_donation(
        &self,
        donor: &DonorName,
        raw_amount: &str,
    ) -> Result<RecordOutcome, Error> {
        // The donor is resolved before the amount is validated, so a rejected
        // amount can still leave a freshly created donor behind.
        let donor = self
            .donors
            .find_or_create(donor)
            .await
            .map_err(map_persistence_error)?;

        let amount = match DonationAmount::parse(raw_amount) {
            Ok(amount) => amount,
            Err(reason) => {
                debug!(donor_id = %donor.id(), "donation amount rejected");
                return Ok(RecordOutcome::InvalidAmount { donor, reason });
            }
        };

        let new_donation = NewDonation {
            donor_id: donor.id(),
            amount,
            created_at: self.clock.utc(),
        };
        let donation = self
            .donations
            .create(&donor, &new_donation)
            .await
            .map_err(map_persistence_error)?;

        info!(
            donor_id = %donor.id(),
            donation_id = donation.id().get(),
            amount = amount.get(),
            "donation recorded"
        );
        Ok(RecordOutcome::Recorded(donation))
    }
}

#[async_trait]
impl<D, N> DonationsQuery for DonationService<D, N>
where
    D: DonorRepository,
    N: DonationRepository,
{
    async fn list_donations(&self) -> Result<Vec<Donation>, Error> {
        self.donations
            .list_all()
            .await
            .map_err(map_persistence_error)
    }

    async fn donor_summary(&self, name: &str) -> Result<Option<DonorSummary>, Error> {
        // Blank names can never have been stored.
        let Ok(name) = DonorName::new(name) else {
            return Ok(None);
        };

        let Some(donor) = self
            .donors
            .find_by_name(&name)
            .await
            .map_err(map_persistence_error)?
        else {
            return Ok(None);
        };

        let donations = self
            .donations
            .list_for_donor(&donor)
            .await
            .map_err(map_persistence_error)?;
        Ok(Some(DonorSummary::new(donor, donations)))
    }
}
