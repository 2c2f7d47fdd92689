use actix_web::{post, web, Responder};
use serde::Deserialize;

use super::error_response::experience_error_response;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::experience::application::domain::entities::CreateExperienceData;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateExperienceRequest {
    pub company: String,
    pub position: String,
    pub description: Option<String>,
    pub start_date: String,
    pub end_date: Option<String>,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub technologies: Vec<String>,
}

impl From<CreateExperienceRequest> for CreateExperienceData {
    fn from(req: CreateExperienceRequest) -> Self {
        Self {
            company: req.company,
            position: req.position,
            description: req.description,
            start_date: req.start_date,
            end_date: req.end_date,
            is_current: req.is_current,
            technologies: req.technologies,
        }
    }
}

#[post("/api/admin/experiences")]
pub async fn create_experience_handler(
    _admin: AdminUser,
    req: web::Json<CreateExperienceRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.experience.create.execute(req.into_inner().into()).await {
        Ok(experience) => ApiResponse::created(experience),
        Err(e) => experience_error_response(e, "creating experience"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use serde_json::{json, Value};
    use uuid::Uuid;

    use crate::experience::application::domain::entities::{Experience, NewExperience};
    use crate::experience::application::ports::incoming::use_cases::{
        CreateExperienceUseCase, ExperienceError,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{admin_bearer, test_token_provider};

    struct EchoCreate;

    #[async_trait]
    impl CreateExperienceUseCase for EchoCreate {
        async fn execute(
            &self,
            data: CreateExperienceData,
        ) -> Result<Experience, ExperienceError> {
            let new = NewExperience::try_from(data)?;
            Ok(Experience {
                id: Uuid::new_v4(),
                company: new.company,
                position: new.position,
                description: new.description,
                start_date: new.start_date,
                end_date: new.end_date,
                is_current: new.is_current,
                technologies: new.technologies,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
        }
    }

    async fn post(body: Value) -> (StatusCode, Value) {
        let app_state = TestAppStateBuilder::default()
            .with_create_experience(EchoCreate)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(create_experience_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/experiences")
            .insert_header(("Authorization", admin_bearer()))
            .set_json(&body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_create_experience() {
        let (status, body) = post(json!({
            "company": "Acme",
            "position": "Backend Engineer",
            "start_date": "2022-04",
            "technologies": ["Rust", "Postgres"]
        }))
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["is_current"], false);
        assert_eq!(body["data"]["technologies"], json!(["Rust", "Postgres"]));
        assert_eq!(body["data"]["end_date"], Value::Null);
    }

    #[actix_web::test]
    async fn test_current_with_end_date_is_400() {
        let (status, body) = post(json!({
            "company": "Acme",
            "position": "Backend Engineer",
            "start_date": "2022-04",
            "end_date": "2023-01",
            "is_current": true
        }))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
