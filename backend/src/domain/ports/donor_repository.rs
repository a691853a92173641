//! Port abstraction for donor persistence adapters.
use async_trait::async_trait;

use crate::domain::{Donor, DonorName};

use super::DonationPersistenceError;

/// Donor storage keyed by exact name.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DonorRepository: Send + Sync {
    /// Fetch the donor whose name matches exactly.
    async fn find_by_name(
        &self,
        name: &DonorName,
    ) -> Result<Option<Donor>, DonationPersistenceError>;

    /// Return the donor with this name, inserting it first when absent.
    ///
    /// Implementations must converge on a single row when two callers race
    /// on the same new name.
    async fn find_or_create(&self, name: &DonorName) -> Result<Donor, DonationPersistenceError>;
}
