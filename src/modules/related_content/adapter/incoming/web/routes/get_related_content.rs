use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::related_content::application::ports::incoming::use_cases::RelatedContentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct RelatedContentParams {
    pub limit: Option<usize>,
}

#[get("/api/monologues/{id}/related")]
pub async fn get_related_content_handler(
    path: web::Path<Uuid>,
    params: web::Query<RelatedContentParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.related_content.get.execute(id, params.limit).await {
        Ok(related) => ApiResponse::success(related),
        Err(RelatedContentError::StoreUnavailable(msg)) => {
            error!("Store unavailable while matching content for {}: {}", id, msg);
            ApiResponse::store_unavailable()
        }
        Err(RelatedContentError::RepositoryError(msg)) => {
            error!("Repository error while matching content for {}: {}", id, msg);
            ApiResponse::internal_error()
        }
    }
}
