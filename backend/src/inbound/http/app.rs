//! Application assembly shared by the server and the test harness.

use actix_session::{
    SessionMiddleware, config::CookieContentSecurity, storage::CookieSessionStore,
};
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::{NormalizePath, TrailingSlash};
use actix_web::{App, web};

use crate::Trace;
use crate::inbound::http::configure;
use crate::inbound::http::state::HttpState;

/// Name of the private session cookie.
pub const SESSION_COOKIE: &str = "session";

/// Cookie-backed session middleware.
///
/// The cookie is encrypted with `key`, scoped to `/`, HTTP-only and
/// `SameSite=Lax`. `cookie_secure` controls the `Secure` attribute.
pub fn session_middleware(key: Key, cookie_secure: bool) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name(SESSION_COOKIE.to_owned())
        .cookie_path("/".to_owned())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(SameSite::Lax)
        .build()
}

/// Every page route behind `session`, trailing-slash normalisation and
/// request tracing.
pub fn build_app(
    http_state: web::Data<HttpState>,
    session: SessionMiddleware<CookieSessionStore>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(http_state)
        .wrap(session)
        .wrap(NormalizePath::new(TrailingSlash::Always))
        .wrap(Trace)
        .configure(configure)
}
