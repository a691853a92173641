//! PostgreSQL-backed `DonationRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{DonationPersistenceError, DonationRepository};
use crate::domain::{Donation, DonationAmount, DonationId, Donor, NewDonation};

use super::diesel_donor_repository::{map_diesel_error, map_pool_error, row_to_donor};
use super::models::{DonationRow, DonorRow, NewDonationRow};
use super::pool::DbPool;
use super::schema::{donations, donors};

/// Diesel-backed implementation of the [`DonationRepository`] port.
///
/// Listings are ordered by insertion time, ties broken by id.
#[derive(Clone)]
pub struct DieselDonationRepository {
    pool: DbPool,
}

impl DieselDonationRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_donation(row: DonationRow, donor: Donor) -> Result<Donation, DonationPersistenceError> {
    let amount = DonationAmount::new(row.value).map_err(|_| {
        DonationPersistenceError::query(format!(
            "stored donation {} has non-positive value {}",
            row.id, row.value
        ))
    })?;
    Ok(Donation::new(
        DonationId::new(row.id),
        donor,
        amount,
        row.created_at,
    ))
}

#[async_trait]
impl DonationRepository for DieselDonationRepository {
    async fn create(
        &self,
        donor: &Donor,
        donation: &NewDonation,
    ) -> Result<Donation, DonationPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::insert_into(donations::table)
            .values(&NewDonationRow {
                donor_id: donation.donor_id.get(),
                value: donation.amount.get(),
                created_at: donation.created_at,
            })
            .returning(DonationRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_donation(row, donor.clone())
    }

    async fn list_all(&self) -> Result<Vec<Donation>, DonationPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<(DonationRow, DonorRow)> = donations::table
            .inner_join(donors::table)
            .select((DonationRow::as_select(), DonorRow::as_select()))
            .order((donations::created_at.asc(), donations::id.asc()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter()
            .map(|(donation, donor)| row_to_donation(donation, row_to_donor(donor)?))
            .collect()
    }

    async fn list_for_donor(
        &self,
        donor: &Donor,
    ) -> Result<Vec<Donation>, DonationPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<DonationRow> = donations::table
            .filter(donations::donor_id.eq(donor.id().get()))
            .select(DonationRow::as_select())
            .order((donations::created_at.asc(), donations::id.asc()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter()
            .map(|row| row_to_donation(row, donor.clone()))
            .collect()
    }
}
