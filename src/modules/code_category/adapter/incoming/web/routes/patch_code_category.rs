use actix_web::{patch, web, Responder};
use serde::Deserialize;
use uuid::Uuid;

use super::error_response::code_category_error_response;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::code_category::application::domain::entities::PatchCodeCategoryData;
use crate::shared::api::ApiResponse;
use crate::shared::patch::PatchField;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct PatchCodeCategoryRequest {
    #[serde(default)]
    pub name: PatchField<String>,
    #[serde(default)]
    pub slug: PatchField<String>,
    #[serde(default)]
    pub description: PatchField<String>,
    #[serde(default)]
    pub parent_id: PatchField<Uuid>,
    #[serde(default)]
    pub color: PatchField<String>,
    #[serde(default)]
    pub icon: PatchField<String>,
}

impl From<PatchCodeCategoryRequest> for PatchCodeCategoryData {
    fn from(req: PatchCodeCategoryRequest) -> Self {
        Self {
            name: req.name,
            slug: req.slug,
            description: req.description,
            parent_id: req.parent_id,
            color: req.color,
            icon: req.icon,
        }
    }
}

#[patch("/api/admin/code-categories/{id}")]
pub async fn patch_code_category_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<PatchCodeCategoryRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data
        .code_category
        .patch
        .execute(id, req.into_inner().into())
        .await
    {
        Ok(category) => ApiResponse::success(category),
        Err(e) => code_category_error_response(e, &format!("patching code category {id}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    use crate::code_category::application::domain::entities::CodeCategory;
    use crate::code_category::application::ports::incoming::use_cases::{
        CodeCategoryError, PatchCodeCategoryUseCase,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{admin_bearer, test_token_provider};

    #[derive(Clone, Default)]
    struct RecordingPatch {
        seen: Arc<Mutex<Option<PatchCodeCategoryData>>>,
    }

    #[async_trait]
    impl PatchCodeCategoryUseCase for RecordingPatch {
        async fn execute(
            &self,
            _id: Uuid,
            data: PatchCodeCategoryData,
        ) -> Result<CodeCategory, CodeCategoryError> {
            *self.seen.lock().unwrap() = Some(data);
            Err(CodeCategoryError::NotFound)
        }
    }

    #[actix_web::test]
    async fn test_patch_body_maps_to_tri_state_fields() {
        let recorder = RecordingPatch::default();
        let app_state = TestAppStateBuilder::default()
            .with_patch_code_category(recorder.clone())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(patch_code_category_handler),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri(&format!("/api/admin/code-categories/{}", Uuid::new_v4()))
            .insert_header(("Authorization", admin_bearer()))
            .set_json(json!({"color": null, "name": "Systems", "unknown_key": 1}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "CODE_CATEGORY_NOT_FOUND");

        let seen = recorder.seen.lock().unwrap().clone().unwrap();
        assert_eq!(seen.name, PatchField::Value("Systems".to_string()));
        assert!(seen.color.is_null());
        assert!(seen.slug.is_unset());
        assert!(seen.parent_id.is_unset());
    }
}
