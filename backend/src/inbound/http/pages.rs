//! HTML page models rendered with askama.
//!
//! Templates live under `templates/` and auto-escape every interpolated
//! value, so donor names and error messages are safe to echo back.

use askama::Template;
use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;

use crate::domain::{Donation, DonorSummary, Error};

/// One line of a donation listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonationLine {
    /// Donor name.
    pub donor: String,
    /// Donated amount.
    pub amount: i64,
}

impl From<&Donation> for DonationLine {
    fn from(donation: &Donation) -> Self {
        Self {
            donor: donation.donor().name().to_string(),
            amount: donation.amount().get(),
        }
    }
}

/// `GET /donations/`.
#[derive(Template)]
#[template(path = "donations.html")]
pub struct DonationsPage {
    /// Every donation, oldest first.
    pub donations: Vec<DonationLine>,
}

impl DonationsPage {
    /// Build the listing from domain donations.
    pub fn new(donations: &[Donation]) -> Self {
        Self {
            donations: donations.iter().map(DonationLine::from).collect(),
        }
    }
}

/// `GET|POST /create/`.
#[derive(Template, Default)]
#[template(path = "create.html")]
pub struct CreatePage {
    /// Inline validation message.
    pub error: Option<String>,
}

/// `GET|POST /login/`.
#[derive(Template, Default)]
#[template(path = "login.html")]
pub struct LoginPage {
    /// Inline authentication failure message.
    pub error: Option<String>,
}

/// Query results for a single donor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    /// Donor name.
    pub donor: String,
    /// Donation amounts, oldest first.
    pub amounts: Vec<i64>,
    /// Sum of `amounts`.
    pub total: i128,
}

impl From<&DonorSummary> for SummaryView {
    fn from(summary: &DonorSummary) -> Self {
        Self {
            donor: summary.donor().name().to_string(),
            amounts: summary
                .donations()
                .iter()
                .map(|donation| donation.amount().get())
                .collect(),
            total: summary.total(),
        }
    }
}

/// `GET|POST /query/`.
#[derive(Template, Default)]
#[template(path = "query.html")]
pub struct QueryPage {
    /// Lookup failure message.
    pub error: Option<String>,
    /// Results for a found donor.
    pub summary: Option<SummaryView>,
}

/// Error page shown for failures that are not handled inline.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    /// HTTP status code.
    pub status: u16,
    /// Message safe to show to the operator.
    pub message: String,
    /// Request trace identifier, when in scope.
    pub trace_id: Option<String>,
}

/// Render `page` into an HTML response with `status`.
///
/// # Errors
/// Returns an internal error when the template fails to render.
pub fn render<T: Template>(status: StatusCode, page: &T) -> Result<HttpResponse, Error> {
    let body = page
        .render()
        .map_err(|err| Error::internal(format!("template rendering failed: {err}")))?;
    Ok(HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(body))
}

/// Render `page` with `200 OK`.
///
/// # Errors
/// Returns an internal error when the template fails to render.
pub fn ok<T: Template>(page: &T) -> Result<HttpResponse, Error> {
    render(StatusCode::OK, page)
}
