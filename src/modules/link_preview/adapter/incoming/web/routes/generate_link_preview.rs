use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::link_preview::application::ports::outgoing::LinkPreviewError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateLinkPreviewRequest {
    pub url: String,
}

/// Preview for an arbitrary URL. Nothing is stored.
#[post("/api/admin/url-previews")]
pub async fn generate_link_preview_handler(
    _admin: AdminUser,
    req: web::Json<GenerateLinkPreviewRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.link_preview.generate.execute(req.into_inner().url).await {
        Ok(preview) => ApiResponse::success(preview),
        Err(LinkPreviewError::EmptyUrl) => ApiResponse::validation_error("url is required"),
        Err(LinkPreviewError::GenerationFailed(msg)) => {
            error!("Preview generation failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
