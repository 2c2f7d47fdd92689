use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    UpdateMany,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::blog_post::adapter::outgoing::sea_orm_entity::blog_posts::{
    self, ActiveModel, Column, Entity,
};
use crate::blog_post::application::domain::entities::{
    BlogPost, BlogPostChanges, BlogStatus, NewBlogPost,
};
use crate::blog_post::application::ports::outgoing::{
    BlogPostRepository, BlogPostRepositoryError,
};
use crate::shared::persistence::{classify_db_err, published_at_expr, ColumnChanges, StoreFailure};

#[derive(Clone)]
pub struct BlogPostRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BlogPostRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BlogPostRepository for BlogPostRepositoryPostgres {
    async fn create(&self, data: NewBlogPost) -> Result<BlogPost, BlogPostRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            slug: Set(data.slug),
            excerpt: Set(data.excerpt),
            content: Set(data.content),
            cover_image_url: Set(data.cover_image_url),
            tags: Set(data.tags),
            status: Set(data.status.as_str().to_string()),
            seo_title: Set(data.seo_title),
            seo_description: Set(data.seo_description),
            published_at: Set(data.published_at.map(|t| t.fixed_offset())),
            like_count: Set(0),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let row = model.insert(&*self.db).await.map_err(map_db_err)?;
        model_to_domain(row)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: BlogPostChanges,
    ) -> Result<BlogPost, BlogPostRepositoryError> {
        let rows = update_query(id, changes, Utc::now())
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        match rows.into_iter().next() {
            Some(row) => model_to_domain(row),
            None => Err(BlogPostRepositoryError::NotFound),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, BlogPostRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected > 0)
    }
}

/// Single `UPDATE ... RETURNING`; the sticky publish is a `COALESCE` so the
/// store decides which publish was first.
fn update_query(id: Uuid, changes: BlogPostChanges, now: DateTime<Utc>) -> UpdateMany<Entity> {
    let mut columns = ColumnChanges::<Entity>::new();
    columns
        .set_if(Column::Title, changes.title)
        .set_if(Column::Excerpt, changes.excerpt)
        .set_if(Column::Content, changes.content)
        .set_if(Column::CoverImageUrl, changes.cover_image_url)
        .set_if(Column::Tags, changes.tags)
        .set_if(Column::Status, changes.status.map(|s| s.as_str().to_string()))
        .set_if(Column::SeoTitle, changes.seo_title)
        .set_if(Column::SeoDescription, changes.seo_description)
        .set(Column::UpdatedAt, now.fixed_offset());

    if let Some(change) = changes.published_at {
        columns.set_expr(Column::PublishedAt, published_at_expr(Column::PublishedAt, change));
    }

    columns
        .apply(Entity::update_many())
        .filter(Column::Id.eq(id))
}

pub(crate) fn model_to_domain(
    model: blog_posts::Model,
) -> Result<BlogPost, BlogPostRepositoryError> {
    let status = model
        .status
        .parse::<BlogStatus>()
        .map_err(BlogPostRepositoryError::DatabaseError)?;

    Ok(BlogPost {
        id: model.id,
        title: model.title,
        slug: model.slug,
        excerpt: model.excerpt,
        content: model.content,
        cover_image_url: model.cover_image_url,
        tags: model.tags,
        status,
        seo_title: model.seo_title,
        seo_description: model.seo_description,
        published_at: model.published_at.map(Into::into),
        like_count: model.like_count,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn map_db_err(e: DbErr) -> BlogPostRepositoryError {
    match classify_db_err(&e) {
        StoreFailure::Unavailable(msg) => BlogPostRepositoryError::StoreUnavailable(msg),
        StoreFailure::UniqueViolation(_) => BlogPostRepositoryError::SlugAlreadyExists,
        StoreFailure::ForeignKeyViolation(msg) | StoreFailure::Other(msg) => {
            BlogPostRepositoryError::DatabaseError(msg)
        }
    }
}
