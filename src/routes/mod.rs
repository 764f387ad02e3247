//! HTTP route handlers for the JSON API.

pub mod customers;
pub mod invoices;

use actix_web::HttpResponse;
use log::error;

use crate::services::ServiceError;

/// Maps service failures onto HTTP statuses. Unexpected failures are logged
/// and returned as opaque 500s.
pub(crate) fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().finish(),
        ServiceError::Conflict(message) => HttpResponse::Conflict().body(message),
        ServiceError::Form(message) => HttpResponse::BadRequest().body(message),
        ServiceError::Repository(err) => {
            error!("Repository failure: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
