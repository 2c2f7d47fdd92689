use actix_web::{post, web, Responder};
use serde::Deserialize;

use super::error_response::blog_post_error_response;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::blog_post::application::domain::entities::{BlogStatus, CreateBlogPostData};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateBlogPostRequest {
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub status: Option<BlogStatus>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
}

impl From<CreateBlogPostRequest> for CreateBlogPostData {
    fn from(req: CreateBlogPostRequest) -> Self {
        Self {
            title: req.title,
            slug: req.slug,
            excerpt: req.excerpt,
            content: req.content,
            cover_image_url: req.cover_image_url,
            tags: req.tags,
            status: req.status,
            seo_title: req.seo_title,
            seo_description: req.seo_description,
        }
    }
}

#[post("/api/admin/blog-posts")]
pub async fn create_blog_post_handler(
    _admin: AdminUser,
    req: web::Json<CreateBlogPostRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.blog_post.create.execute(req.into_inner().into()).await {
        Ok(post) => ApiResponse::created(post),
        Err(e) => blog_post_error_response(e, "creating blog post"),
    }
}
