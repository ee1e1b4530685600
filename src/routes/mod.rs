//! Actix handlers and the service-error to HTTP mapping.

use actix_web::HttpResponse;
use log::error;
use serde_json::json;

use crate::services::ServiceError;

pub mod campaign;

/// Translates a [`ServiceError`] into the client-facing response.
///
/// Domain rule violations carry their message to the caller; anything
/// unexpected is logged and answered with a generic body.
pub fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::Domain(e) => HttpResponse::BadRequest().json(json!({
            "message": e.to_string(),
        })),
        ServiceError::Conflict(message) => HttpResponse::Conflict().json(json!({
            "message": message,
        })),
        ServiceError::NotFound => HttpResponse::NotFound().json(json!({
            "message": "campaign not found",
        })),
        ServiceError::Internal(message) => {
            error!("unexpected failure: {message}");
            HttpResponse::InternalServerError().json(json!({
                "message": "an unexpected error occurred",
            }))
        }
    }
}
