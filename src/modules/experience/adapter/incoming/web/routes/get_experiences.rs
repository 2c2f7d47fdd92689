use actix_web::{get, web, Responder};

use super::error_response::experience_error_response;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/experiences")]
pub async fn get_experiences_handler(data: web::Data<AppState>) -> impl Responder {
    match data.experience.get_list.execute().await {
        Ok(experiences) => ApiResponse::success(experiences),
        Err(e) => experience_error_response(e, "listing experiences"),
    }
}
