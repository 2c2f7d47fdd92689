use actix_web::{post, web, Responder};
use serde::Deserialize;
use uuid::Uuid;

use super::error_response::code_category_error_response;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::code_category::application::domain::entities::CreateCodeCategoryData;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateCodeCategoryRequest {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub parent_id: Option<Uuid>,
    pub color: Option<String>,
    pub icon: Option<String>,
}

impl From<CreateCodeCategoryRequest> for CreateCodeCategoryData {
    fn from(req: CreateCodeCategoryRequest) -> Self {
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

#[post("/api/admin/code-categories")]
pub async fn create_code_category_handler(
    _admin: AdminUser,
    req: web::Json<CreateCodeCategoryRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.code_category.create.execute(req.into_inner().into()).await {
        Ok(category) => ApiResponse::created(category),
        Err(e) => code_category_error_response(e, "creating code category"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};

    use crate::code_category::application::domain::entities::CodeCategory;
    use crate::code_category::application::ports::incoming::use_cases::{
        CodeCategoryError, CreateCodeCategoryUseCase,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{admin_bearer, test_token_provider};

    struct MockCreate(Result<CodeCategory, CodeCategoryError>);

    #[async_trait]
    impl CreateCodeCategoryUseCase for MockCreate {
        async fn execute(
            &self,
            _data: CreateCodeCategoryData,
        ) -> Result<CodeCategory, CodeCategoryError> {
            self.0.clone()
        }
    }

    async fn post_category(uc: MockCreate, auth: Option<String>) -> (StatusCode, Value) {
        let app_state = TestAppStateBuilder::default()
            .with_create_code_category(uc)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(create_code_category_handler),
        )
        .await;

        let mut req = test::TestRequest::post()
            .uri("/api/admin/code-categories")
            .set_json(json!({"name": "Rust", "slug": "rust"}));
        if let Some(header) = auth {
            req = req.insert_header(("Authorization", header));
        }

        let resp = test::call_service(&app, req.to_request()).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_create_requires_admin() {
        let (status, _) = post_category(MockCreate(Err(CodeCategoryError::NotFound)), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_create_slug_conflict_is_409() {
        let (status, body) = post_category(
            MockCreate(Err(CodeCategoryError::SlugAlreadyExists)),
            Some(admin_bearer()),
        )
        .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "SLUG_ALREADY_EXISTS");
    }

    #[actix_web::test]
    async fn test_create_validation_message_passed_through() {
        let (status, body) = post_category(
            MockCreate(Err(CodeCategoryError::Validation(
                crate::shared::validation::ValidationError::Required("name"),
            ))),
            Some(admin_bearer()),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "name is required");
    }
}
