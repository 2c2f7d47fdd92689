use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, Select,
};
use std::sync::Arc;

use crate::blog_post::adapter::outgoing::blog_post_repository_postgres::model_to_domain;
use crate::blog_post::adapter::outgoing::sea_orm_entity::blog_posts::{Column, Entity};
use crate::blog_post::application::domain::entities::{BlogPost, BlogStatus};
use crate::blog_post::application::ports::outgoing::{
    BlogPostQuery, BlogPostQueryError, BlogPostRepositoryError,
};
use crate::shared::persistence::{classify_db_err, StoreFailure};
use crate::shared::visibility::Visibility;

#[derive(Clone)]
pub struct BlogPostQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BlogPostQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn visible(query: Select<Entity>, visibility: Visibility) -> Select<Entity> {
    match visibility {
        Visibility::Public => query.filter(Column::Status.eq(BlogStatus::Published.as_str())),
        Visibility::Admin => query,
    }
}

fn list_query(visibility: Visibility) -> Select<Entity> {
    let query = visible(Entity::find(), visibility);
    match visibility {
        Visibility::Public => query.order_by_desc(Column::PublishedAt),
        Visibility::Admin => query.order_by_desc(Column::CreatedAt),
    }
}

#[async_trait]
impl BlogPostQuery for BlogPostQueryPostgres {
    async fn list(&self, visibility: Visibility) -> Result<Vec<BlogPost>, BlogPostQueryError> {
        let rows = list_query(visibility)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter()
            .map(|row| model_to_domain(row).map_err(map_row_err))
            .collect()
    }

    async fn find_by_slug(
        &self,
        slug: &str,
        visibility: Visibility,
    ) -> Result<BlogPost, BlogPostQueryError> {
        let row = visible(Entity::find(), visibility)
            .filter(Column::Slug.eq(slug))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(BlogPostQueryError::NotFound)?;

        model_to_domain(row).map_err(map_row_err)
    }
}

fn map_row_err(e: BlogPostRepositoryError) -> BlogPostQueryError {
    BlogPostQueryError::DatabaseError(e.to_string())
}

fn map_db_err(e: DbErr) -> BlogPostQueryError {
    match classify_db_err(&e) {
        StoreFailure::Unavailable(msg) => BlogPostQueryError::StoreUnavailable(msg),
        StoreFailure::UniqueViolation(msg)
        | StoreFailure::ForeignKeyViolation(msg)
        | StoreFailure::Other(msg) => {
            BlogPostQueryError::DatabaseError(msg)
        }
    }
}
