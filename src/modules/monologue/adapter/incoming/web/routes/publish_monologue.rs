use actix_web::{post, web, Responder};
use uuid::Uuid;

use super::error_response::monologue_error_response;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/admin/monologues/{id}/publish")]
pub async fn publish_monologue_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.monologue.publish.execute(id).await {
        Ok(monologue) => ApiResponse::success(monologue),
        Err(e) => monologue_error_response(e, &format!("publishing monologue {id}")),
    }
}

#[post("/api/admin/monologues/{id}/unpublish")]
pub async fn unpublish_monologue_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.monologue.unpublish.execute(id).await {
        Ok(monologue) => ApiResponse::success(monologue),
        Err(e) => monologue_error_response(e, &format!("unpublishing monologue {id}")),
    }
}
