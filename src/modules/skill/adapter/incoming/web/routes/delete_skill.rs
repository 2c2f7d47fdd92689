use actix_web::{delete, web, Responder};
use uuid::Uuid;

use super::error_response::skill_error_response;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/admin/skills/{id}")]
pub async fn delete_skill_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.skill.delete.execute(id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => skill_error_response(e, &format!("deleting skill {id}")),
    }
}
