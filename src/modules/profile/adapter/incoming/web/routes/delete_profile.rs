use actix_web::{delete, web, Responder};
use uuid::Uuid;

use super::error_response::profile_error_response;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/admin/profiles/{id}")]
pub async fn delete_profile_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.profile.delete.execute(id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => profile_error_response(e, &format!("deleting profile {id}")),
    }
}
