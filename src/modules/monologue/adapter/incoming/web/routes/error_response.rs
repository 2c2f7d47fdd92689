use actix_web::HttpResponse;
use tracing::error;

use crate::monologue::application::ports::incoming::use_cases::MonologueError;
use crate::shared::api::ApiResponse;

pub(super) fn monologue_error_response(e: MonologueError, context: &str) -> HttpResponse {
    match e {
        MonologueError::NotFound => {
            ApiResponse::not_found("MONOLOGUE_NOT_FOUND", "Monologue not found")
        }
        MonologueError::Validation(v) => ApiResponse::validation_error(&v.to_string()),
        MonologueError::StoreUnavailable(msg) => {
            error!("Store unavailable while {}: {}", context, msg);
            ApiResponse::store_unavailable()
        }
        MonologueError::RepositoryError(msg) => {
            error!("Repository error while {}: {}", context, msg);
            ApiResponse::internal_error()
        }
    }
}
