use actix_web::{patch, web, Responder};
use serde::Deserialize;
use uuid::Uuid;

use super::error_response::blog_post_error_response;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::blog_post::application::domain::entities::{BlogStatus, PatchBlogPostData};
use crate::shared::api::ApiResponse;
use crate::shared::patch::PatchField;
use crate::AppState;

/// `slug` is not listed, so a body carrying it is accepted and the key ignored.
#[derive(Debug, Deserialize)]
pub struct PatchBlogPostRequest {
    #[serde(default)]
    pub title: PatchField<String>,
    #[serde(default)]
    pub excerpt: PatchField<String>,
    #[serde(default)]
    pub content: PatchField<String>,
    #[serde(default)]
    pub cover_image_url: PatchField<String>,
    #[serde(default)]
    pub tags: PatchField<Vec<String>>,
    #[serde(default)]
    pub status: PatchField<BlogStatus>,
    #[serde(default)]
    pub seo_title: PatchField<String>,
    #[serde(default)]
    pub seo_description: PatchField<String>,
}

impl From<PatchBlogPostRequest> for PatchBlogPostData {
    fn from(req: PatchBlogPostRequest) -> Self {
        Self {
            title: req.title,
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

#[patch("/api/admin/blog-posts/{id}")]
pub async fn patch_blog_post_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<PatchBlogPostRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.blog_post.patch.execute(id, req.into_inner().into()).await {
        Ok(post) => ApiResponse::success(post),
        Err(e) => blog_post_error_response(e, &format!("patching blog post {id}")),
    }
}
