use actix_web::{patch, web, Responder};
use serde::Deserialize;
use uuid::Uuid;

use super::error_response::experience_error_response;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::experience::application::domain::entities::PatchExperienceData;
use crate::shared::api::ApiResponse;
use crate::shared::patch::PatchField;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct PatchExperienceRequest {
    #[serde(default)]
    pub company: PatchField<String>,
    #[serde(default)]
    pub position: PatchField<String>,
    #[serde(default)]
    pub description: PatchField<String>,
    #[serde(default)]
    pub start_date: PatchField<String>,
    #[serde(default)]
    pub end_date: PatchField<String>,
    #[serde(default)]
    pub is_current: PatchField<bool>,
    #[serde(default)]
    pub technologies: PatchField<Vec<String>>,
}

impl From<PatchExperienceRequest> for PatchExperienceData {
    fn from(req: PatchExperienceRequest) -> Self {
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

#[patch("/api/admin/experiences/{id}")]
pub async fn patch_experience_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<PatchExperienceRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data
        .experience
        .patch
        .execute(id, req.into_inner().into())
        .await
    {
        Ok(experience) => ApiResponse::success(experience),
        Err(e) => experience_error_response(e, &format!("patching experience {id}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    use crate::experience::application::domain::entities::Experience;
    use crate::experience::application::ports::incoming::use_cases::{
        ExperienceError, PatchExperienceUseCase,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{admin_bearer, test_token_provider};

    #[derive(Clone, Default)]
    struct RecordingPatch {
        seen: Arc<Mutex<Option<PatchExperienceData>>>,
    }

    #[async_trait]
    impl PatchExperienceUseCase for RecordingPatch {
        async fn execute(
            &self,
            _id: Uuid,
            data: PatchExperienceData,
        ) -> Result<Experience, ExperienceError> {
            *self.seen.lock().unwrap() = Some(data);
            Err(ExperienceError::NotFound)
        }
    }

    #[actix_web::test]
    async fn test_patch_body_maps_to_tri_state() {
        let recorder = RecordingPatch::default();
        let app_state = TestAppStateBuilder::default()
            .with_patch_experience(recorder.clone())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(patch_experience_handler),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri(&format!("/api/admin/experiences/{}", Uuid::new_v4()))
            .insert_header(("Authorization", admin_bearer()))
            .set_json(json!({"description": null, "is_current": true, "unknown": 1}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let seen = recorder.seen.lock().unwrap().clone().unwrap();
        assert!(seen.description.is_null());
        assert_eq!(seen.is_current, PatchField::Value(true));
        assert!(seen.company.is_unset());
        assert!(seen.technologies.is_unset());
    }
}
