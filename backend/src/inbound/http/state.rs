//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` so they depend only on domain
//! ports and stay testable without a database.

use std::sync::Arc;

use crate::domain::ports::{DonationsCommand, DonationsQuery, LoginService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Credential checks for the login form.
    pub login: Arc<dyn LoginService>,
    /// Donation recording for the creation form.
    pub donations_command: Arc<dyn DonationsCommand>,
    /// Listing and per-donor lookups.
    pub donations_query: Arc<dyn DonationsQuery>,
}

impl HttpState {
    /// Construct state from the port implementations.
    pub fn new(
        login: Arc<dyn LoginService>,
        donations_command: Arc<dyn DonationsCommand>,
        donations_query: Arc<dyn DonationsQuery>,
    ) -> Self {
        Self {
            login,
            donations_command,
            donations_query,
        }
    }
}
