use actix_web::{patch, web, Responder};
use serde::Deserialize;
use uuid::Uuid;

use super::error_response::monologue_error_response;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::monologue::application::domain::entities::{
    ContentType, Difficulty, PatchMonologueData,
};
use crate::shared::api::ApiResponse;
use crate::shared::patch::PatchField;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct PatchMonologueRequest {
    #[serde(default)]
    pub content: PatchField<String>,
    #[serde(default)]
    pub content_type: PatchField<ContentType>,
    #[serde(default)]
    pub code_language: PatchField<String>,
    #[serde(default)]
    pub code_snippet: PatchField<String>,
    #[serde(default)]
    pub code_category_id: PatchField<Uuid>,
    #[serde(default)]
    pub difficulty: PatchField<Difficulty>,
    #[serde(default)]
    pub tags: PatchField<Vec<String>>,
    #[serde(default)]
    pub url: PatchField<String>,
    #[serde(default)]
    pub series: PatchField<String>,
    #[serde(default)]
    pub category: PatchField<String>,
    #[serde(default)]
    pub is_published: PatchField<bool>,
}

impl From<PatchMonologueRequest> for PatchMonologueData {
    fn from(req: PatchMonologueRequest) -> Self {
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

#[patch("/api/admin/monologues/{id}")]
pub async fn patch_monologue_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<PatchMonologueRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.monologue.patch.execute(id, req.into_inner().into()).await {
        Ok(monologue) => ApiResponse::success(monologue),
        Err(e) => monologue_error_response(e, &format!("patching monologue {id}")),
    }
}
