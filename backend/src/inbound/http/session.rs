//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! The session cookie carries at most two values: the signed-in username and
//! a one-shot [`RedirectTarget`] to follow after the next successful login.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::{Error, Username};

pub(crate) const USERNAME_KEY: &str = "username";
pub(crate) const REDIRECT_TO_KEY: &str = "redirect_to";

/// Page to visit once the operator has signed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedirectTarget {
    /// The donation listing.
    Donations,
    /// The creation form.
    Create,
}

impl RedirectTarget {
    /// Request path for this target.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Donations => "/donations/",
            Self::Create => "/create/",
        }
    }
}

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Mark the session as authenticated for `username`.
    ///
    /// # Errors
    /// Returns an internal error when the session cannot be serialised.
    pub fn persist_user(&self, username: &Username) -> Result<(), Error> {
        self.0.renew();
        self.0
            .insert(USERNAME_KEY, username.as_ref())
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Username of the signed-in operator, if any.
    ///
    /// A corrupt or blank stored value is logged and treated as anonymous.
    ///
    /// # Errors
    /// Returns an internal error when the session cannot be read.
    pub fn username(&self) -> Result<Option<Username>, Error> {
        let raw = self
            .0
            .get::<String>(USERNAME_KEY)
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))?;
        match raw.map(Username::new) {
            Some(Ok(username)) => Ok(Some(username)),
            Some(Err(error)) => {
                warn!(%error, "invalid username in session cookie");
                Ok(None)
            }
            None => Ok(None),
        }
    }

    /// Return the session to the anonymous state.
    ///
    /// A pending redirect target, if any, is kept.
    pub fn clear_user(&self) {
        self.0.remove(USERNAME_KEY);
    }

    /// Remember where to send the operator after the next login.
    ///
    /// # Errors
    /// Returns an internal error when the session cannot be serialised.
    pub fn set_redirect_target(&self, target: RedirectTarget) -> Result<(), Error> {
        self.0
            .insert(REDIRECT_TO_KEY, target)
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Remove and return the pending redirect target.
    ///
    /// Unrecognised stored values are discarded.
    pub fn take_redirect_target(&self) -> Option<RedirectTarget> {
        match self.0.remove_as::<RedirectTarget>(REDIRECT_TO_KEY)? {
            Ok(target) => Some(target),
            Err(raw) => {
                warn!(%raw, "discarding unrecognised redirect target");
                None
            }
        }
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
