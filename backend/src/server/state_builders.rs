//! Wiring of Diesel adapters into the domain services behind `HttpState`.

use std::sync::Arc;

use mockable::DefaultClock;

use donations::domain::{DonationService, PasswordLoginService};
use donations::inbound::http::state::HttpState;
use donations::outbound::persistence::{
    DbPool, DieselDonationRepository, DieselDonorRepository, DieselUserRepository,
};

/// Build handler state over the PostgreSQL-backed repositories.
pub fn build_http_state(pool: &DbPool) -> HttpState {
    let donations = Arc::new(DonationService::new(
        Arc::new(DieselDonorRepository::new(pool.clone())),
        Arc::new(DieselDonationRepository::new(pool.clone())),
        Arc::new(DefaultClock),
    ));
    let login = Arc::new(PasswordLoginService::new(Arc::new(
        DieselUserRepository::new(pool.clone()),
    )));
    HttpState::new(login, donations.clone(), donations)
}
