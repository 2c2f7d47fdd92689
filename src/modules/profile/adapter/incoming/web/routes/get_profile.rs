use actix_web::{get, web, Responder};

use super::error_response::profile_error_response;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/profile")]
pub async fn get_profile_handler(data: web::Data<AppState>) -> impl Responder {
    match data.profile.get_default.execute().await {
        Ok(profile) => ApiResponse::success(profile),
        Err(e) => profile_error_response(e, "loading profile"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use serde_json::Value;
    use uuid::Uuid;

    use crate::profile::application::domain::entities::{Profile, SocialLink};
    use crate::profile::application::ports::incoming::use_cases::{
        GetProfileUseCase, ProfileError,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    struct MockGetProfile(Option<Profile>);

    #[async_trait]
    impl GetProfileUseCase for MockGetProfile {
        async fn execute(&self) -> Result<Profile, ProfileError> {
            self.0.clone().ok_or(ProfileError::NotFound)
        }
    }

    async fn get(use_case: MockGetProfile) -> (StatusCode, Value) {
        let app_state = TestAppStateBuilder::default()
            .with_get_profile(use_case)
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(get_profile_handler)).await;

        let req = test::TestRequest::get().uri("/api/profile").to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_get_profile_with_links() {
        let profile = Profile {
            id: Uuid::new_v4(),
            name: "Ada".to_string(),
            title: Some("Engineer".to_string()),
            bio: None,
            avatar_url: None,
            social_links: vec![SocialLink {
                platform: "github".to_string(),
                url: "https://github.com/ada".to_string(),
                icon: None,
            }],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let (status, body) = get(MockGetProfile(Some(profile))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["name"], "Ada");
        assert_eq!(body["data"]["bio"], Value::Null);
        assert_eq!(body["data"]["social_links"][0]["platform"], "github");
    }

    #[actix_web::test]
    async fn test_get_profile_not_found() {
        let (status, body) = get(MockGetProfile(None)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "PROFILE_NOT_FOUND");
    }
}
