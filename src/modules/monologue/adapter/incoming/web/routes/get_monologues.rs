use actix_web::{get, web, Responder};
use serde::Deserialize;
use uuid::Uuid;

use super::error_response::monologue_error_response;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::monologue::application::domain::entities::{Difficulty, MonologueFilter};
use crate::shared::api::ApiResponse;
use crate::shared::visibility::Visibility;
use crate::AppState;

/// `tags` is a comma-separated list: `?tags=rust,async`.
#[derive(Debug, Default, Deserialize)]
pub struct MonologueListParams {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub category_id: Option<Uuid>,
    pub difficulty: Option<Difficulty>,
    pub tags: Option<String>,
}

impl TryFrom<MonologueListParams> for MonologueFilter {
    type Error = String;

    fn try_from(params: MonologueListParams) -> Result<Self, Self::Error> {
        let tags = params
            .tags
            .map(|raw| {
                raw.split(',')
                    .map(|t| t.trim().to_string())
                    .filter(|t| !t.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let filter = Self {
            limit: params.limit,
            offset: params.offset,
            category_id: params.category_id,
            difficulty: params.difficulty,
            tags,
        };
        filter.check_paging()?;
        Ok(filter)
    }
}

#[get("/api/monologues")]
pub async fn get_monologues_handler(
    params: web::Query<MonologueListParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = match MonologueFilter::try_from(params.into_inner()) {
        Ok(f) => f,
        Err(msg) => return ApiResponse::validation_error(&msg),
    };

    match data.monologue.get_list.execute(filter, Visibility::Public).await {
        Ok(page) => ApiResponse::success(page),
        Err(e) => monologue_error_response(e, "listing monologues"),
    }
}

#[get("/api/admin/monologues")]
pub async fn get_admin_monologues_handler(
    _admin: AdminUser,
    params: web::Query<MonologueListParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = match MonologueFilter::try_from(params.into_inner()) {
        Ok(f) => f,
        Err(msg) => return ApiResponse::validation_error(&msg),
    };

    match data.monologue.get_list.execute(filter, Visibility::Admin).await {
        Ok(page) => ApiResponse::success(page),
        Err(e) => monologue_error_response(e, "listing monologues for admin"),
    }
}

#[get("/api/monologues/{id}")]
pub async fn get_monologue_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.monologue.get_single.execute(id, Visibility::Public).await {
        Ok(monologue) => ApiResponse::success(monologue),
        Err(e) => monologue_error_response(e, &format!("loading monologue {id}")),
    }
}
