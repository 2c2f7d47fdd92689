use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    UpdateMany,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::monologue::adapter::outgoing::sea_orm_entity::monologues::{
    self, ActiveModel, Column, Entity,
};
use crate::monologue::application::domain::entities::{
    ContentType, Difficulty, Monologue, MonologueChanges, NewMonologue,
};
use crate::monologue::application::ports::outgoing::{
    MonologueRepository, MonologueRepositoryError,
};
use crate::shared::persistence::{classify_db_err, published_at_expr, ColumnChanges, StoreFailure};

#[derive(Clone)]
pub struct MonologueRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MonologueRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MonologueRepository for MonologueRepositoryPostgres {
    async fn create(&self, data: NewMonologue) -> Result<Monologue, MonologueRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            content: Set(data.content),
            content_type: Set(data.content_type.as_str().to_string()),
            code_language: Set(data.code_language),
            code_snippet: Set(data.code_snippet),
            code_category_id: Set(data.code_category_id),
            difficulty: Set(data.difficulty.map(|d| d.as_str().to_string())),
            tags: Set(data.tags),
            url: Set(data.url),
            series: Set(data.series),
            category: Set(data.category),
            is_published: Set(data.is_published),
            published_at: Set(data.published_at.map(|t| t.fixed_offset())),
            like_count: Set(0),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let row = model.insert(&*self.db).await.map_err(map_db_err)?;
        model_to_domain(row).map_err(MonologueRepositoryError::DatabaseError)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: MonologueChanges,
    ) -> Result<Monologue, MonologueRepositoryError> {
        let rows = update_query(id, changes, Utc::now())
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        match rows.into_iter().next() {
            Some(row) => model_to_domain(row).map_err(MonologueRepositoryError::DatabaseError),
            None => Err(MonologueRepositoryError::NotFound),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, MonologueRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected > 0)
    }
}

/// Single `UPDATE ... RETURNING`. Patch-path publishes go through
/// `COALESCE`; explicit publish/unpublish overwrite.
fn update_query(id: Uuid, changes: MonologueChanges, now: DateTime<Utc>) -> UpdateMany<Entity> {
    let mut columns = ColumnChanges::<Entity>::new();
    columns
        .set_if(Column::Content, changes.content)
        .set_if(
            Column::ContentType,
            changes.content_type.map(|c| c.as_str().to_string()),
        )
        .set_if(Column::CodeLanguage, changes.code_language)
        .set_if(Column::CodeSnippet, changes.code_snippet)
        .set_if(Column::CodeCategoryId, changes.code_category_id)
        .set_if(
            Column::Difficulty,
            changes
                .difficulty
                .map(|d| d.map(|d| d.as_str().to_string())),
        )
        .set_if(Column::Tags, changes.tags)
        .set_if(Column::Url, changes.url)
        .set_if(Column::Series, changes.series)
        .set_if(Column::Category, changes.category)
        .set_if(Column::IsPublished, changes.is_published)
        .set(Column::UpdatedAt, now.fixed_offset());

    if let Some(change) = changes.published_at {
        columns.set_expr(Column::PublishedAt, published_at_expr(Column::PublishedAt, change));
    }

    columns
        .apply(Entity::update_many())
        .filter(Column::Id.eq(id))
}

/// Row to domain without the embedded category and preview.
pub(crate) fn model_to_domain(model: monologues::Model) -> Result<Monologue, String> {
    let content_type = model.content_type.parse::<ContentType>()?;
    let difficulty = model
        .difficulty
        .as_deref()
        .map(str::parse::<Difficulty>)
        .transpose()?;

    Ok(Monologue {
        id: model.id,
        content: model.content,
        content_type,
        code_language: model.code_language,
        code_snippet: model.code_snippet,
        code_category_id: model.code_category_id,
        code_category: None,
        difficulty,
        tags: model.tags,
        url: model.url,
        url_preview: None,
        series: model.series,
        category: model.category,
        is_published: model.is_published,
        published_at: model.published_at.map(Into::into),
        like_count: model.like_count,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn map_db_err(e: DbErr) -> MonologueRepositoryError {
    match classify_db_err(&e) {
        StoreFailure::Unavailable(msg) => MonologueRepositoryError::StoreUnavailable(msg),
        StoreFailure::ForeignKeyViolation(_) => MonologueRepositoryError::UnknownCodeCategory,
        StoreFailure::UniqueViolation(msg) | StoreFailure::Other(msg) => {
            MonologueRepositoryError::DatabaseError(msg)
        }
    }
}
