//! Redirect responses.
//!
//! Form submissions redirect with `303 See Other` so the browser follows up
//! with a `GET`; everything else uses `302 Found`.

use actix_web::HttpResponse;
use actix_web::http::header::LOCATION;

/// `302 Found` to `location`.
pub fn found(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((LOCATION, location))
        .finish()
}

/// `303 See Other` to `location`.
pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, location))
        .finish()
}
