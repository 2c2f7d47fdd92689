use actix_web::HttpResponse;
use tracing::error;

use crate::blog_post::application::ports::incoming::use_cases::BlogPostError;
use crate::shared::api::ApiResponse;

pub(super) fn blog_post_error_response(e: BlogPostError, context: &str) -> HttpResponse {
    match e {
        BlogPostError::NotFound => {
            ApiResponse::not_found("BLOG_POST_NOT_FOUND", "Blog post not found")
        }
        BlogPostError::Validation(v) => ApiResponse::validation_error(&v.to_string()),
        BlogPostError::SlugAlreadyExists => ApiResponse::slug_conflict(),
        BlogPostError::StoreUnavailable(msg) => {
            error!("Store unavailable while {}: {}", context, msg);
            ApiResponse::store_unavailable()
        }
        BlogPostError::RepositoryError(msg) => {
            error!("Repository error while {}: {}", context, msg);
            ApiResponse::internal_error()
        }
    }
}
