//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod donation_repository;
mod donations_command;
mod donations_query;
mod donor_repository;
mod login_service;
mod user_repository;

#[cfg(test)]
pub use donation_repository::MockDonationRepository;
pub use donation_repository::{DonationPersistenceError, DonationRepository};
#[cfg(test)]
pub use donations_command::MockDonationsCommand;
pub use donations_command::{DonationsCommand, RecordOutcome};
#[cfg(test)]
pub use donations_query::MockDonationsQuery;
pub use donations_query::DonationsQuery;
#[cfg(test)]
pub use donor_repository::MockDonorRepository;
pub use donor_repository::DonorRepository;
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::LoginService;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
