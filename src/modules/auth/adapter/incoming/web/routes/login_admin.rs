use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::application::ports::incoming::use_cases::{LoginAdminCommand, LoginAdminError};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginAdminRequest {
    pub username: String,
    pub password: String,
}

#[post("/api/auth/login")]
pub async fn login_admin_handler(
    req: web::Json<LoginAdminRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let command = match LoginAdminCommand::new(req.username, req.password) {
        Ok(c) => c,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.login_admin.execute(command).await {
        Ok(result) => ApiResponse::success(result),

        Err(LoginAdminError::InvalidCredentials) => {
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid username or password")
        }

        Err(e) => {
            error!("Admin login failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
