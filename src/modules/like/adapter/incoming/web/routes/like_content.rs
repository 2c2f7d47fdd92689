use actix_web::{post, web, HttpResponse, Responder};
use tracing::error;

use crate::like::application::ports::incoming::use_cases::LikeError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn like_error_response(e: LikeError, not_found_code: &str, id: &str) -> HttpResponse {
    match e {
        LikeError::NotFound => ApiResponse::not_found(not_found_code, "Content not found"),
        LikeError::Validation(v) => ApiResponse::validation_error(&v.to_string()),
        LikeError::StoreUnavailable(msg) => {
            error!("Store unavailable while liking {}: {}", id, msg);
            ApiResponse::store_unavailable()
        }
        LikeError::RepositoryError(msg) => {
            error!("Repository error while liking {}: {}", id, msg);
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/blog-posts/{id}/like")]
pub async fn like_blog_post_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let raw_id = path.into_inner();

    match data.like.blog_post.execute(raw_id.clone()).await {
        Ok(result) => ApiResponse::success(result),
        Err(e) => like_error_response(e, "BLOG_POST_NOT_FOUND", &raw_id),
    }
}

#[post("/api/monologues/{id}/like")]
pub async fn like_monologue_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let raw_id = path.into_inner();

    match data.like.monologue.execute(raw_id.clone()).await {
        Ok(result) => ApiResponse::success(result),
        Err(e) => like_error_response(e, "MONOLOGUE_NOT_FOUND", &raw_id),
    }
}
