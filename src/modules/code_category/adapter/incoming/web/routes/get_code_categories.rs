use actix_web::{get, web, Responder};

use super::error_response::code_category_error_response;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/code-categories")]
pub async fn get_code_categories_handler(data: web::Data<AppState>) -> impl Responder {
    match data.code_category.get_list.execute().await {
        Ok(categories) => ApiResponse::success(categories),
        Err(e) => code_category_error_response(e, "listing code categories"),
    }
}

#[get("/api/code-categories/hierarchy")]
pub async fn get_code_category_hierarchy_handler(data: web::Data<AppState>) -> impl Responder {
    match data.code_category.get_hierarchy.execute().await {
        Ok(tree) => ApiResponse::success(tree),
        Err(e) => code_category_error_response(e, "building code category hierarchy"),
    }
}
