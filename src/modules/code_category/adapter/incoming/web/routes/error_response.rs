use actix_web::HttpResponse;
use tracing::error;

use crate::code_category::application::ports::incoming::use_cases::CodeCategoryError;
use crate::shared::api::ApiResponse;

pub(super) fn code_category_error_response(e: CodeCategoryError, context: &str) -> HttpResponse {
    match e {
        CodeCategoryError::NotFound => {
            ApiResponse::not_found("CODE_CATEGORY_NOT_FOUND", "Code category not found")
        }
        CodeCategoryError::Validation(v) => ApiResponse::validation_error(&v.to_string()),
        CodeCategoryError::SlugAlreadyExists => ApiResponse::slug_conflict(),
        CodeCategoryError::StoreUnavailable(msg) => {
            error!("Store unavailable while {}: {}", context, msg);
            ApiResponse::store_unavailable()
        }
        CodeCategoryError::RepositoryError(msg) => {
            error!("Repository error while {}: {}", context, msg);
            ApiResponse::internal_error()
        }
    }
}
