//! Shared helpers for HTTP flow tests.

use std::sync::Arc;

use actix_http::Request;
use actix_web::cookie::Cookie;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::http::header::LOCATION;
use actix_web::test;

use donations::test_support::{InMemoryDonationStore, InMemoryUserRepository, session_cookie};

/// Operator account present in every flow.
pub const OPERATOR: &str = "admin";
/// Password for [`OPERATOR`].
pub const PASSWORD: &str = "correct horse";

/// Fresh stores with a single operator account.
pub fn stores() -> (Arc<InMemoryDonationStore>, Arc<InMemoryUserRepository>) {
    let users = InMemoryUserRepository::new()
        .with_user(OPERATOR, PASSWORD)
        .expect("valid fixture user");
    (Arc::new(InMemoryDonationStore::new()), Arc::new(users))
}

/// A rendered response reduced to what the assertions need.
#[derive(Debug)]
pub struct Page {
    /// Response status.
    pub status: StatusCode,
    /// `Location` header, if any.
    pub location: Option<String>,
    /// `trace-id` header, if any.
    pub trace_id: Option<String>,
    /// Body decoded as UTF-8.
    pub body: String,
}

/// Cookie-carrying client over an initialised test service.
pub struct Browser<S> {
    app: S,
    cookie: Option<Cookie<'static>>,
}

impl<S> Browser<S>
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    pub fn new(app: S) -> Self {
        Self { app, cookie: None }
    }

    pub async fn get(&mut self, uri: &str) -> Page {
        self.send(test::TestRequest::get().uri(uri)).await
    }

    pub async fn post(&mut self, uri: &str, form: &[(&str, &str)]) -> Page {
        self.send(test::TestRequest::post().uri(uri).set_form(form))
            .await
    }

    pub async fn sign_in(&mut self) -> Page {
        self.post("/login/", &[("name", OPERATOR), ("password", PASSWORD)])
            .await
    }

    async fn send(&mut self, request: test::TestRequest) -> Page {
        let request = match self.cookie.clone() {
            Some(cookie) => request.cookie(cookie),
            None => request,
        };
        let res = test::call_service(&self.app, request.to_request()).await;
        if let Some(cookie) = session_cookie(&res) {
            self.cookie = Some(cookie);
        }
        let status = res.status();
        let header = |name: &str| {
            res.headers()
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned)
        };
        let location = header(LOCATION.as_str());
        let trace_id = header("trace-id");
        let body = test::read_body(res).await;
        Page {
            status,
            location,
            trace_id,
            body: String::from_utf8(body.to_vec()).expect("utf8 body"),
        }
    }
}
