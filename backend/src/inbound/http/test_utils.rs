//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::cookie::Cookie;
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpResponse, test, web};

use crate::domain::ports::{MockDonationsCommand, MockDonationsQuery, MockLoginService};
use crate::domain::{Error, Username};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

pub use crate::test_support::{session_cookie, test_session_middleware};

const SIGN_IN_PATH: &str = "/__test/sign-in";

/// State whose ports panic if called. Override the fields a test needs.
pub fn test_state() -> HttpState {
    HttpState::new(
        Arc::new(MockLoginService::new()),
        Arc::new(MockDonationsCommand::new()),
        Arc::new(MockDonationsQuery::new()),
    )
}

async fn sign_in(session: SessionContext, path: web::Path<String>) -> Result<HttpResponse, Error> {
    let username = Username::new(path.into_inner())
        .map_err(|err| Error::invalid_request(err.to_string()))?;
    session.persist_user(&username)?;
    Ok(HttpResponse::NoContent().finish())
}

/// Full route table over `state`, plus a sign-in shortcut that bypasses the
/// login service.
pub fn test_app_with(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    crate::test_support::test_app(state)
        .route(&format!("{SIGN_IN_PATH}/{{name}}/"), web::get().to(sign_in))
}

/// Session cookie for a session signed in as `name`.
pub async fn signed_in_cookie<S>(app: &S, name: &str) -> Cookie<'static>
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let res = test::call_service(
        app,
        test::TestRequest::get()
            .uri(&format!("{SIGN_IN_PATH}/{name}"))
            .to_request(),
    )
    .await;
    session_cookie(&res).expect("sign-in should set a session cookie")
}
