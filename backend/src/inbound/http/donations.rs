//! Donation page handlers.
//!
//! ```text
//! GET  /              -> 302 /donations/
//! GET  /donations/    listing
//! GET  /create/       creation form (signed in)
//! POST /create/       name=..&donation=..&save=Save+Donation
//! GET  /query/        lookup form
//! POST /query/        name=..
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;
use tracing::debug;

use crate::domain::DonorName;
use crate::domain::ports::RecordOutcome;
use crate::inbound::http::HttpResult;
use crate::inbound::http::pages::{self, CreatePage, DonationsPage, QueryPage, SummaryView};
use crate::inbound::http::redirect::{found, see_other};
use crate::inbound::http::session::{RedirectTarget, SessionContext};
use crate::inbound::http::state::HttpState;

/// Submit button value that returns to the listing after saving.
pub const SAVE_SENTINEL: &str = "Save Donation";
/// Login page path.
pub(crate) const LOGIN_PATH: &str = "/login/";

/// Form body for `POST /create/`.
#[derive(Debug, Default, Deserialize)]
pub struct DonationForm {
    /// Donor name, stored verbatim.
    #[serde(default)]
    pub name: String,
    /// Raw amount text.
    #[serde(default)]
    pub donation: String,
    /// Which submit button was pressed.
    #[serde(default)]
    pub save: Option<String>,
}

/// Form body for `POST /query/`.
#[derive(Debug, Default, Deserialize)]
pub struct QueryForm {
    /// Donor name to look up exactly.
    #[serde(default)]
    pub name: String,
}

/// Send visitors of the site root to the listing.
#[get("/")]
pub async fn home() -> HttpResponse {
    found(RedirectTarget::Donations.path())
}

/// List every donation. No sign-in required.
#[get("/donations/")]
pub async fn list_donations(state: web::Data<HttpState>) -> HttpResult<HttpResponse> {
    let donations = state.donations_query.list_donations().await?;
    pages::ok(&DonationsPage::new(&donations))
}

/// Show the empty creation form.
#[get("/create/")]
pub async fn create_form(session: SessionContext) -> HttpResult<HttpResponse> {
    if session.username()?.is_none() {
        return Ok(found(LOGIN_PATH));
    }
    pages::ok(&CreatePage::default())
}

/// Record a donation, creating the donor on first use.
#[post("/create/")]
pub async fn create_donation(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<DonationForm>,
) -> HttpResult<HttpResponse> {
    if session.username()?.is_none() {
        return Ok(see_other(LOGIN_PATH));
    }
    let DonationForm {
        name,
        donation,
        save,
    } = form.into_inner();

    let donor = match DonorName::new(name) {
        Ok(donor) => donor,
        Err(error) => {
            debug!(%error, "donor name rejected");
            return pages::ok(&CreatePage {
                error: Some(error.to_string()),
            });
        }
    };

    match state
        .donations_command
        .record_donation(&donor, &donation)
        .await?
    {
        RecordOutcome::InvalidAmount { reason, .. } => pages::ok(&CreatePage {
            error: Some(reason.to_string()),
        }),
        RecordOutcome::Recorded(_) if save.as_deref() == Some(SAVE_SENTINEL) => {
            Ok(see_other(RedirectTarget::Donations.path()))
        }
        RecordOutcome::Recorded(_) => pages::ok(&CreatePage::default()),
    }
}

/// Show the empty lookup form.
#[get("/query/")]
pub async fn query_form() -> HttpResult<HttpResponse> {
    pages::ok(&QueryPage::default())
}

/// Look up a donor by exact name and total their donations.
#[post("/query/")]
pub async fn query_donor(
    state: web::Data<HttpState>,
    form: web::Form<QueryForm>,
) -> HttpResult<HttpResponse> {
    let QueryForm { name } = form.into_inner();
    let page = match state.donations_query.donor_summary(&name).await? {
        Some(summary) => QueryPage {
            error: None,
            summary: Some(SummaryView::from(&summary)),
        },
        None => QueryPage {
            error: Some(format!("No such donor named: {name}")),
            summary: None,
        },
    };
    pages::ok(&page)
}
