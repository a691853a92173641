//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations only translate between Diesel rows and domain
//! types. Row structs (`models.rs`) and table definitions (`schema.rs`) stay
//! private to this module, and every driver failure is mapped to a port
//! error before it leaves.
//!
//! ```ignore
//! use donations::outbound::persistence::{DbPool, DieselDonorRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/donations")).await?;
//! let donors = DieselDonorRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_donation_repository;
mod diesel_donor_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;
mod settings;

pub use diesel_donation_repository::DieselDonationRepository;
pub use diesel_donor_repository::DieselDonorRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
pub use settings::{DatabaseSettings, DatabaseSettingsError};
