//! HTTP inbound adapter serving the donation pages.

pub mod app;
pub mod auth;
pub mod donations;
pub mod error;
pub mod pages;
pub mod redirect;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;

use actix_web::web;

pub use error::HttpResult;

/// Register every page handler on `cfg`.
///
/// Handlers expect `web::Data<HttpState>` in app data and a session
/// middleware wrapping the app.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use donations::inbound::http::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(donations::home)
        .service(donations::list_donations)
        .service(donations::create_form)
        .service(donations::create_donation)
        .service(donations::query_form)
        .service(donations::query_donor)
        .service(auth::login_form)
        .service(auth::login)
        .service(auth::logout);
}
