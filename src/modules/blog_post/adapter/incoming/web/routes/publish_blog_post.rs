use actix_web::{post, web, Responder};
use uuid::Uuid;

use super::error_response::blog_post_error_response;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/admin/blog-posts/{id}/publish")]
pub async fn publish_blog_post_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.blog_post.publish.execute(id).await {
        Ok(post) => ApiResponse::success(post),
        Err(e) => blog_post_error_response(e, &format!("publishing blog post {id}")),
    }
}

#[post("/api/admin/blog-posts/{id}/unpublish")]
pub async fn unpublish_blog_post_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.blog_post.unpublish.execute(id).await {
        Ok(post) => ApiResponse::success(post),
        Err(e) => blog_post_error_response(e, &format!("unpublishing blog post {id}")),
    }
}
