use actix_web::{delete, web, Responder};
use uuid::Uuid;

use super::error_response::monologue_error_response;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/admin/monologues/{id}")]
pub async fn delete_monologue_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.monologue.delete.execute(id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => monologue_error_response(e, &format!("deleting monologue {id}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use chrono::Utc;

    use crate::monologue::application::domain::entities::CreateMonologueData;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{admin_bearer, test_token_provider};
    use crate::tests::support::fixed_clock::FixedClock;
    use crate::tests::support::in_memory_store::InMemoryStore;

    #[actix_web::test]
    async fn test_delete_takes_preview_with_it() {
        let store = InMemoryStore::default();
        let id = store
            .seed_monologue(
                CreateMonologueData {
                    content: "bye".to_string(),
                    url: Some("https://a.example".to_string()),
                    ..Default::default()
                },
                Utc::now(),
            )
            .await
            .id;

        let app_state = TestAppStateBuilder::default()
            .with_store(store.clone(), FixedClock::shared(Utc::now()))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(delete_monologue_handler),
        )
        .await;

        let delete = || {
            test::TestRequest::delete()
                .uri(&format!("/api/admin/monologues/{id}"))
                .insert_header(("Authorization", admin_bearer()))
                .to_request()
        };

        let resp = test::call_service(&app, delete()).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert_eq!(store.preview_count().await, 0);

        let resp = test::call_service(&app, delete()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
