use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::link_preview::adapter::outgoing::sea_orm_entity::url_previews::{
    self, ActiveModel, Column, Entity,
};
use crate::link_preview::application::domain::entities::{PreviewMetadata, UrlPreview};
use crate::link_preview::application::ports::outgoing::{
    UrlPreviewRepository, UrlPreviewRepositoryError,
};
use crate::shared::persistence::{classify_db_err, StoreFailure};

#[derive(Clone)]
pub struct UrlPreviewRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UrlPreviewRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UrlPreviewRepository for UrlPreviewRepositoryPostgres {
    async fn find_for_monologues(
        &self,
        monologue_ids: &[Uuid],
    ) -> Result<Vec<UrlPreview>, UrlPreviewRepositoryError> {
        if monologue_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = Entity::find()
            .filter(Column::MonologueId.is_in(monologue_ids.iter().copied()))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_domain).collect())
    }

    async fn create(
        &self,
        monologue_id: Uuid,
        metadata: PreviewMetadata,
    ) -> Result<UrlPreview, UrlPreviewRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            monologue_id: Set(monologue_id),
            title: Set(metadata.title),
            description: Set(metadata.description),
            image_url: Set(metadata.image_url),
            site_name: Set(metadata.site_name),
            url: Set(metadata.url),
            favicon: Set(metadata.favicon),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let row = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_domain(row))
    }

    async fn delete_for_monologue(
        &self,
        monologue_id: Uuid,
    ) -> Result<u64, UrlPreviewRepositoryError> {
        let result = Entity::delete_many()
            .filter(Column::MonologueId.eq(monologue_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected)
    }
}

pub(crate) fn model_to_domain(model: url_previews::Model) -> UrlPreview {
    UrlPreview {
        id: model.id,
        monologue_id: model.monologue_id,
        title: model.title,
        description: model.description,
        image_url: model.image_url,
        site_name: model.site_name,
        url: model.url,
        favicon: model.favicon,
        created_at: model.created_at.into(),
    }
}

fn map_db_err(e: DbErr) -> UrlPreviewRepositoryError {
    match classify_db_err(&e) {
        StoreFailure::Unavailable(msg) => UrlPreviewRepositoryError::StoreUnavailable(msg),
        StoreFailure::UniqueViolation(msg)
        | StoreFailure::ForeignKeyViolation(msg)
        | StoreFailure::Other(msg) => {
            UrlPreviewRepositoryError::DatabaseError(msg)
        }
    }
}
