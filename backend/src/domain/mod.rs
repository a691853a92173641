//! Domain primitives, ports and services.
//!
//! Purpose: define strongly typed donors, donations and operator accounts,
//! plus the services the HTTP adapter drives. Nothing here depends on actix
//! or Diesel.
//!
//! Public surface:
//! - `Error` / `ErrorCode`: transport-agnostic failure payload.
//! - `Donor`, `Donation`, `DonorSummary`: the donation ledger.
//! - `User`, `PasswordHash`, `LoginCredentials`: operator authentication.
//! - `DonationService`, `PasswordLoginService`: port implementations.

pub mod auth;
pub mod donation;
pub mod donation_service;
pub mod donor;
pub mod error;
pub mod password;
pub mod password_login_service;
pub mod ports;
pub mod user;

pub use self::auth::LoginCredentials;
pub use self::donation::{
    Donation, DonationAmount, DonationAmountError, DonationId, DonorSummary, NewDonation,
};
pub use self::donation_service::DonationService;
pub use self::donor::{Donor, DonorId, DonorName, DonorValidationError};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::password::{PasswordHash, PasswordHashError};
pub use self::password_login_service::PasswordLoginService;
pub use self::user::{User, Username, UsernameValidationError};
