//! HTTP adapter mapping for domain errors.
//!
//! Keeps the domain error type HTTP-agnostic while letting handlers return
//! `Result<_, Error>` and have failures rendered as an HTML error page.

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError};
use askama::Template;
use tracing::error;

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::pages::ErrorPage;
use crate::middleware::trace::TraceId;

/// Convenient result alias for HTTP handlers.
pub type HttpResult<T> = Result<T, Error>;

const REDACTED_MESSAGE: &str = "Internal server error";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn public_message(error: &Error) -> &str {
    match error.code() {
        ErrorCode::InternalError => REDACTED_MESSAGE,
        ErrorCode::ServiceUnavailable => error.code().default_message(),
        _ => error.message(),
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let trace_id = TraceId::current().map(|id| id.to_string());
        if status.is_server_error() {
            error!(
                code = ?self.code(),
                message = self.message(),
                trace_id = trace_id.as_deref(),
                "request failed"
            );
        }

        let page = ErrorPage {
            status: status.as_u16(),
            message: public_message(self).to_owned(),
            trace_id,
        };
        match page.render() {
            Ok(body) => HttpResponse::build(status)
                .content_type(ContentType::html())
                .body(body),
            Err(render_error) => {
                error!(error = %render_error, "error page rendering failed");
                HttpResponse::build(status)
                    .content_type(ContentType::plaintext())
                    .body(public_message(self).to_owned())
            }
        }
    }
}
