use actix_web::{patch, web, Responder};
use serde::Deserialize;
use uuid::Uuid;

use super::error_response::profile_error_response;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::profile::application::domain::entities::{PatchProfileData, SocialLink};
use crate::shared::api::ApiResponse;
use crate::shared::patch::PatchField;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct PatchProfileRequest {
    #[serde(default)]
    pub name: PatchField<String>,
    #[serde(default)]
    pub title: PatchField<String>,
    #[serde(default)]
    pub bio: PatchField<String>,
    #[serde(default)]
    pub avatar_url: PatchField<String>,
    #[serde(default)]
    pub social_links: PatchField<Vec<SocialLink>>,
}

impl From<PatchProfileRequest> for PatchProfileData {
    fn from(req: PatchProfileRequest) -> Self {
        Self {
            name: req.name,
            title: req.title,
            bio: req.bio,
            avatar_url: req.avatar_url,
            social_links: req.social_links,
        }
    }
}

#[patch("/api/admin/profiles/{id}")]
pub async fn patch_profile_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<PatchProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.profile.patch.execute(id, req.into_inner().into()).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(e) => profile_error_response(e, &format!("patching profile {id}")),
    }
}
