use actix_web::HttpResponse;
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::skill::application::ports::incoming::use_cases::SkillError;

pub(super) fn skill_error_response(e: SkillError, context: &str) -> HttpResponse {
    match e {
        SkillError::NotFound => ApiResponse::not_found("SKILL_NOT_FOUND", "Skill not found"),
        SkillError::Validation(v) => ApiResponse::validation_error(&v.to_string()),
        SkillError::StoreUnavailable(msg) => {
            error!("Store unavailable while {}: {}", context, msg);
            ApiResponse::store_unavailable()
        }
        SkillError::RepositoryError(msg) => {
            error!("Repository error while {}: {}", context, msg);
            ApiResponse::internal_error()
        }
    }
}
