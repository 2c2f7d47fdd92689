use actix_web::HttpResponse;
use tracing::error;

use crate::experience::application::ports::incoming::use_cases::ExperienceError;
use crate::shared::api::ApiResponse;

pub(super) fn experience_error_response(e: ExperienceError, context: &str) -> HttpResponse {
    match e {
        ExperienceError::NotFound => {
            ApiResponse::not_found("EXPERIENCE_NOT_FOUND", "Experience not found")
        }
        ExperienceError::Validation(v) => ApiResponse::validation_error(&v.to_string()),
        ExperienceError::StoreUnavailable(msg) => {
            error!("Store unavailable while {}: {}", context, msg);
            ApiResponse::store_unavailable()
        }
        ExperienceError::RepositoryError(msg) => {
            error!("Repository error while {}: {}", context, msg);
            ApiResponse::internal_error()
        }
    }
}
