//! Login and logout handlers.
//!
//! ```text
//! GET  /login/    login form
//! POST /login/    name=admin&password=...
//! GET  /logout/
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;

use crate::domain::{ErrorCode, LoginCredentials};
use crate::inbound::http::HttpResult;
use crate::inbound::http::donations::LOGIN_PATH;
use crate::inbound::http::pages::{self, LoginPage};
use crate::inbound::http::redirect::{found, see_other};
use crate::inbound::http::session::{RedirectTarget, SessionContext};
use crate::inbound::http::state::HttpState;

/// Form body for `POST /login/`.
#[derive(Deserialize)]
pub struct LoginForm {
    /// Operator name.
    #[serde(default)]
    pub name: String,
    /// Plain-text password; moved into zeroizing storage on conversion.
    #[serde(default)]
    pub password: String,
}

impl From<LoginForm> for LoginCredentials {
    fn from(form: LoginForm) -> Self {
        Self::new(form.name, form.password)
    }
}

/// Show the login form.
#[get("/login/")]
pub async fn login_form() -> HttpResult<HttpResponse> {
    pages::ok(&LoginPage::default())
}

/// Check credentials and sign the session in.
///
/// A pending redirect target is consumed and followed; otherwise the
/// operator lands on the creation form.
#[post("/login/")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<LoginForm>,
) -> HttpResult<HttpResponse> {
    let credentials = LoginCredentials::from(form.into_inner());
    match state.login.authenticate(&credentials).await {
        Ok(username) => {
            session.persist_user(&username)?;
            let target = session
                .take_redirect_target()
                .unwrap_or(RedirectTarget::Create);
            Ok(see_other(target.path()))
        }
        Err(error) if error.code() == ErrorCode::Unauthorized => pages::ok(&LoginPage {
            error: Some(error.message().to_owned()),
        }),
        Err(error) => Err(error),
    }
}

/// Sign the session out.
///
/// Anonymous visitors are sent to the login page and will return to the
/// listing once signed in.
#[get("/logout/")]
pub async fn logout(session: SessionContext) -> HttpResult<HttpResponse> {
    if session.username()?.is_none() {
        session.set_redirect_target(RedirectTarget::Donations)?;
        return Ok(found(LOGIN_PATH));
    }
    session.clear_user();
    Ok(found(RedirectTarget::Donations.path()))
}
