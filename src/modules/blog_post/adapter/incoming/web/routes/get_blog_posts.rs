use actix_web::{get, web, Responder};

use super::error_response::blog_post_error_response;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::shared::visibility::Visibility;
use crate::AppState;

#[get("/api/blog-posts")]
pub async fn get_blog_posts_handler(data: web::Data<AppState>) -> impl Responder {
    match data.blog_post.get_list.execute(Visibility::Public).await {
        Ok(posts) => ApiResponse::success(posts),
        Err(e) => blog_post_error_response(e, "listing blog posts"),
    }
}

#[get("/api/admin/blog-posts")]
pub async fn get_admin_blog_posts_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.blog_post.get_list.execute(Visibility::Admin).await {
        Ok(posts) => ApiResponse::success(posts),
        Err(e) => blog_post_error_response(e, "listing blog posts for admin"),
    }
}

#[get("/api/blog-posts/{slug}")]
pub async fn get_blog_post_by_slug_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.blog_post.get_by_slug.execute(slug.clone()).await {
        Ok(post) => ApiResponse::success(post),
        Err(e) => blog_post_error_response(e, &format!("loading blog post '{slug}'")),
    }
}
