use actix_web::{post, web, Responder};
use serde::Deserialize;

use super::error_response::skill_error_response;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::skill::application::domain::entities::CreateSkillData;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateSkillRequest {
    pub name: String,
    pub category: String,
    pub level: i32,
    pub icon_url: Option<String>,
    pub display_order: Option<i32>,
}

impl From<CreateSkillRequest> for CreateSkillData {
    fn from(req: CreateSkillRequest) -> Self {
        Self {
            name: req.name,
            category: req.category,
            level: req.level,
            icon_url: req.icon_url,
            display_order: req.display_order,
        }
    }
}

#[post("/api/admin/skills")]
pub async fn create_skill_handler(
    _admin: AdminUser,
    req: web::Json<CreateSkillRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.skill.create.execute(req.into_inner().into()).await {
        Ok(skill) => ApiResponse::created(skill),
        Err(e) => skill_error_response(e, "creating skill"),
    }
}
