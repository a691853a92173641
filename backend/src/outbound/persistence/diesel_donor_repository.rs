//! PostgreSQL-backed `DonorRepository` implementation using Diesel ORM.
//!
//! Donor names carry a unique constraint, so concurrent `find_or_create`
//! calls for the same name converge on a single row: the insert is a no-op
//! when the name already exists and the follow-up select returns the winner.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{DonationPersistenceError, DonorRepository};
use crate::domain::{Donor, DonorId, DonorName};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{DonorRow, NewDonorRow};
use super::pool::{DbPool, PoolError};
use super::schema::donors;

/// Diesel-backed implementation of the [`DonorRepository`] port.
#[derive(Clone)]
pub struct DieselDonorRepository {
    pool: DbPool,
}

impl DieselDonorRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

pub(super) fn map_pool_error(error: PoolError) -> DonationPersistenceError {
    map_basic_pool_error(error, |message| {
        DonationPersistenceError::connection(message)
    })
}

pub(super) fn map_diesel_error(error: diesel::result::Error) -> DonationPersistenceError {
    map_basic_diesel_error(
        error,
        DonationPersistenceError::query,
        DonationPersistenceError::connection,
    )
}

/// Convert a stored row into a domain donor.
pub(super) fn row_to_donor(row: DonorRow) -> Result<Donor, DonationPersistenceError> {
    let name = DonorName::new(row.name).map_err(|err| {
        DonationPersistenceError::query(format!("stored donor {} is invalid: {err}", row.id))
    })?;
    Ok(Donor::new(DonorId::new(row.id), name))
}

#[async_trait]
impl DonorRepository for DieselDonorRepository {
    async fn find_by_name(
        &self,
        name: &DonorName,
    ) -> Result<Option<Donor>, DonationPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = donors::table
            .filter(donors::name.eq(name.as_ref()))
            .select(DonorRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_donor).transpose()
    }

    async fn find_or_create(&self, name: &DonorName) -> Result<Donor, DonationPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(donors::table)
            .values(&NewDonorRow {
                name: name.as_ref(),
            })
            .on_conflict(donors::name)
            .do_nothing()
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let row = donors::table
            .filter(donors::name.eq(name.as_ref()))
            .select(DonorRow::as_select())
            .first(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_donor(row)
    }
}

#[cfg(test)]
mod tests {
    //! Row conversion coverage. Query paths are exercised against embedded
    //! PostgreSQL in `tests/diesel_donation_repositories.rs`.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn valid_row_converts() {
        let donor = row_to_donor(DonorRow {
            id: 4,
            name: " Ada ".to_owned(),
        })
        .expect("valid row");
        assert_eq!(donor.id(), DonorId::new(4));
        assert_eq!(donor.name().as_ref(), " Ada ");
    }

    #[rstest]
    fn blank_stored_name_is_a_query_error() {
        let err = row_to_donor(DonorRow {
            id: 9,
            name: "   ".to_owned(),
        })
        .expect_err("blank names are rejected");
        assert!(matches!(err, DonationPersistenceError::Query { .. }));
    }
}
