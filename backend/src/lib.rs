//! Donation desk: a small server-rendered web app for recording donations.
//!
//! Layout follows a hexagonal split:
//! - [`domain`]: donors, donations, operator accounts, ports and services.
//! - [`inbound::http`]: actix-web handlers rendering askama pages.
//! - [`outbound::persistence`]: Diesel/PostgreSQL adapters and migrations.
//! - [`middleware`]: request tracing.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use middleware::Trace;
