use actix_web::{delete, web, Responder};
use uuid::Uuid;

use super::error_response::code_category_error_response;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/admin/code-categories/{id}")]
pub async fn delete_code_category_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.code_category.delete.execute(id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => code_category_error_response(e, &format!("deleting code category {id}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    use crate::code_category::application::ports::incoming::use_cases::{
        CodeCategoryError, DeleteCodeCategoryUseCase,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{admin_bearer, test_token_provider};

    struct MockDelete(Result<(), CodeCategoryError>);

    #[async_trait]
    impl DeleteCodeCategoryUseCase for MockDelete {
        async fn execute(&self, _id: Uuid) -> Result<(), CodeCategoryError> {
            self.0.clone()
        }
    }

    async fn delete_status(uc: MockDelete) -> StatusCode {
        let app_state = TestAppStateBuilder::default()
            .with_delete_code_category(uc)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(delete_code_category_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/admin/code-categories/{}", Uuid::new_v4()))
            .insert_header(("Authorization", admin_bearer()))
            .to_request();

        test::call_service(&app, req).await.status()
    }

    #[actix_web::test]
    async fn test_delete_success_is_204() {
        assert_eq!(delete_status(MockDelete(Ok(()))).await, StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn test_delete_missing_is_404() {
        assert_eq!(
            delete_status(MockDelete(Err(CodeCategoryError::NotFound))).await,
            StatusCode::NOT_FOUND
        );
    }
}
