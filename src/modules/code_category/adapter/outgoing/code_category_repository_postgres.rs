use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, UpdateMany,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::code_category::adapter::outgoing::sea_orm_entity::code_categories::{
    self, ActiveModel, Column, Entity,
};
use crate::code_category::application::domain::entities::{
    CodeCategory, CodeCategoryChanges, NewCodeCategory,
};
use crate::code_category::application::ports::outgoing::{
    CodeCategoryRepository, CodeCategoryRepositoryError,
};
use crate::shared::persistence::{classify_db_err, ColumnChanges, StoreFailure};

#[derive(Clone)]
pub struct CodeCategoryRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CodeCategoryRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CodeCategoryRepository for CodeCategoryRepositoryPostgres {
    async fn list(&self) -> Result<Vec<CodeCategory>, CodeCategoryRepositoryError> {
        let rows = Entity::find()
            .order_by_asc(Column::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_domain).collect())
    }

    async fn create(
        &self,
        data: NewCodeCategory,
    ) -> Result<CodeCategory, CodeCategoryRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            slug: Set(data.slug),
            description: Set(data.description),
            parent_id: Set(data.parent_id),
            color: Set(data.color),
            icon: Set(data.icon),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let row = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_domain(row))
    }

    async fn update(
        &self,
        id: Uuid,
        changes: CodeCategoryChanges,
    ) -> Result<CodeCategory, CodeCategoryRepositoryError> {
        let rows = update_query(id, changes, Utc::now())
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter()
            .next()
            .map(model_to_domain)
            .ok_or(CodeCategoryRepositoryError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, CodeCategoryRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected > 0)
    }
}

fn update_query(id: Uuid, changes: CodeCategoryChanges, now: DateTime<Utc>) -> UpdateMany<Entity> {
    let mut columns = ColumnChanges::<Entity>::new();
    columns
        .set_if(Column::Name, changes.name)
        .set_if(Column::Slug, changes.slug)
        .set_if(Column::Description, changes.description)
        .set_if(Column::ParentId, changes.parent_id)
        .set_if(Column::Color, changes.color)
        .set_if(Column::Icon, changes.icon)
        .set(Column::UpdatedAt, now.fixed_offset());

    columns
        .apply(Entity::update_many())
        .filter(Column::Id.eq(id))
}

pub(crate) fn model_to_domain(model: code_categories::Model) -> CodeCategory {
    CodeCategory {
        id: model.id,
        name: model.name,
        slug: model.slug,
        description: model.description,
        parent_id: model.parent_id,
        color: model.color,
        icon: model.icon,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> CodeCategoryRepositoryError {
    match classify_db_err(&e) {
        StoreFailure::Unavailable(msg) => CodeCategoryRepositoryError::StoreUnavailable(msg),
        StoreFailure::UniqueViolation(_) => CodeCategoryRepositoryError::SlugAlreadyExists,
        StoreFailure::ForeignKeyViolation(msg) | StoreFailure::Other(msg) => {
            CodeCategoryRepositoryError::DatabaseError(msg)
        }
    }
}
