use actix_web::{patch, web, Responder};
use serde::Deserialize;
use uuid::Uuid;

use super::error_response::skill_error_response;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::shared::patch::PatchField;
use crate::skill::application::domain::entities::PatchSkillData;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct PatchSkillRequest {
    #[serde(default)]
    pub name: PatchField<String>,
    #[serde(default)]
    pub category: PatchField<String>,
    #[serde(default)]
    pub level: PatchField<i32>,
    #[serde(default)]
    pub icon_url: PatchField<String>,
    #[serde(default)]
    pub display_order: PatchField<i32>,
}

impl From<PatchSkillRequest> for PatchSkillData {
    fn from(req: PatchSkillRequest) -> Self {
        Self {
            name: req.name,
            category: req.category,
            level: req.level,
            icon_url: req.icon_url,
            display_order: req.display_order,
        }
    }
}

#[patch("/api/admin/skills/{id}")]
pub async fn patch_skill_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<PatchSkillRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.skill.patch.execute(id, req.into_inner().into()).await {
        Ok(skill) => ApiResponse::success(skill),
        Err(e) => skill_error_response(e, &format!("patching skill {id}")),
    }
}
