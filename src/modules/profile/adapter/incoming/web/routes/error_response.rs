use actix_web::HttpResponse;
use tracing::error;

use crate::profile::application::ports::incoming::use_cases::ProfileError;
use crate::shared::api::ApiResponse;

pub(super) fn profile_error_response(e: ProfileError, context: &str) -> HttpResponse {
    match e {
        ProfileError::NotFound => ApiResponse::not_found("PROFILE_NOT_FOUND", "Profile not found"),
        ProfileError::Validation(v) => ApiResponse::validation_error(&v.to_string()),
        ProfileError::StoreUnavailable(msg) => {
            error!("Store unavailable while {}: {}", context, msg);
            ApiResponse::store_unavailable()
        }
        ProfileError::RepositoryError(msg) => {
            error!("Repository error while {}: {}", context, msg);
            ApiResponse::internal_error()
        }
    }
}
