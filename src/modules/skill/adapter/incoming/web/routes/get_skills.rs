use actix_web::{get, web, Responder};

use super::error_response::skill_error_response;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/skills")]
pub async fn get_skills_handler(data: web::Data<AppState>) -> impl Responder {
    match data.skill.get_list.execute().await {
        Ok(skills) => ApiResponse::success(skills),
        Err(e) => skill_error_response(e, "listing skills"),
    }
}

#[get("/api/skills/by-category")]
pub async fn get_skills_by_category_handler(data: web::Data<AppState>) -> impl Responder {
    match data.skill.get_by_category.execute().await {
        Ok(groups) => ApiResponse::success(groups),
        Err(e) => skill_error_response(e, "grouping skills"),
    }
}
