use actix_web::{post, web, Responder};
use serde::Deserialize;
use uuid::Uuid;

use super::error_response::monologue_error_response;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::monologue::application::domain::entities::{
    ContentType, CreateMonologueData, Difficulty,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateMonologueRequest {
    pub content: String,
    #[serde(default)]
    pub content_type: ContentType,
    pub code_language: Option<String>,
    pub code_snippet: Option<String>,
    pub code_category_id: Option<Uuid>,
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub url: Option<String>,
    pub series: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub is_published: bool,
}

impl From<CreateMonologueRequest> for CreateMonologueData {
    fn from(req: CreateMonologueRequest) -> Self {
        Self {
            content: req.content,
            content_type: req.content_type,
            code_language: req.code_language,
            code_snippet: req.code_snippet,
            code_category_id: req.code_category_id,
            difficulty: req.difficulty,
            tags: req.tags,
            url: req.url,
            series: req.series,
            category: req.category,
            is_published: req.is_published,
        }
    }
}

#[post("/api/admin/monologues")]
pub async fn create_monologue_handler(
    _admin: AdminUser,
    req: web::Json<CreateMonologueRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.monologue.create.execute(req.into_inner().into()).await {
        Ok(monologue) => ApiResponse::created(monologue),
        Err(e) => monologue_error_response(e, "creating monologue"),
    }
}
