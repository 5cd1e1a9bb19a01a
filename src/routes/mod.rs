// Route exports
pub mod intros;
pub mod matches;
pub mod onboarding;
pub mod session;

use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::core::Matcher;
use crate::models::ErrorResponse;
use crate::services::{MemoryStore, StoreError};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MemoryStore>,
    pub matcher: Matcher,
    pub match_limit: usize,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(matches::configure)
            .configure(intros::configure)
            .configure(onboarding::configure)
            .configure(session::configure),
    );
}

/// Map a store error to the HTTP response it warrants
pub(crate) fn store_error_response(err: StoreError) -> HttpResponse {
    match &err {
        StoreError::NotFound { .. } => HttpResponse::NotFound().json(ErrorResponse {
            error: "not_found".to_string(),
            message: err.to_string(),
            status_code: 404,
        }),
        StoreError::InvalidTransition { .. } => HttpResponse::Conflict().json(ErrorResponse {
            error: "invalid_transition".to_string(),
            message: err.to_string(),
            status_code: 409,
        }),
        StoreError::InvalidInput(_) => HttpResponse::BadRequest().json(ErrorResponse {
            error: "invalid_input".to_string(),
            message: err.to_string(),
            status_code: 400,
        }),
        StoreError::Poisoned => {
            tracing::error!("Store lock poisoned");
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "internal_error".to_string(),
                message: "Internal storage error".to_string(),
                status_code: 500,
            })
        }
    }
}
