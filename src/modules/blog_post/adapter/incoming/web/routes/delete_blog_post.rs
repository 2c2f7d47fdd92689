use actix_web::{delete, web, Responder};
use uuid::Uuid;

use super::error_response::blog_post_error_response;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/admin/blog-posts/{id}")]
pub async fn delete_blog_post_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.blog_post.delete.execute(id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => blog_post_error_response(e, &format!("deleting blog post {id}")),
    }
}
