use actix_web::{post, web, Responder};
use serde::Deserialize;

use super::error_response::profile_error_response;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::profile::application::domain::entities::{CreateProfileData, SocialLink};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateProfileRequest {
    pub name: String,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
}

impl From<CreateProfileRequest> for CreateProfileData {
    fn from(req: CreateProfileRequest) -> Self {
        Self {
            name: req.name,
            title: req.title,
            bio: req.bio,
            avatar_url: req.avatar_url,
            social_links: req.social_links,
        }
    }
}

#[post("/api/admin/profiles")]
pub async fn create_profile_handler(
    _admin: AdminUser,
    req: web::Json<CreateProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.profile.create.execute(req.into_inner().into()).await {
        Ok(profile) => ApiResponse::created(profile),
        Err(e) => profile_error_response(e, "creating profile"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::json;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::test_token_provider;

    #[actix_web::test]
    async fn test_create_profile_with_bad_token_is_401() {
        let app_state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(create_profile_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/profiles")
            .insert_header(("Authorization", "Bearer not-a-jwt"))
            .set_json(json!({"name": "Ada"}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
