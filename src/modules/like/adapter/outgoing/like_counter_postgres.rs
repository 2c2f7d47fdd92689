use async_trait::async_trait;
use sea_orm::sea_query::{Expr, SimpleExpr};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, UpdateMany};
use std::sync::Arc;
use uuid::Uuid;

use crate::blog_post::adapter::outgoing::sea_orm_entity::blog_posts;
use crate::like::application::domain::entities::LikeTarget;
use crate::like::application::ports::outgoing::{LikeCounter, LikeCounterError};
use crate::monologue::adapter::outgoing::sea_orm_entity::monologues;
use crate::shared::persistence::{classify_db_err, increment_expr, StoreFailure};

/// Bumps `like_count` and touches `updated_at` on the target row. The
/// `monologue_likes` table is not consulted: the same reader can like
/// repeatedly.
#[derive(Clone)]
pub struct LikeCounterPostgres {
    db: Arc<DatabaseConnection>,
}

impl LikeCounterPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn blog_post_increment(id: Uuid) -> UpdateMany<blog_posts::Entity> {
    blog_posts::Entity::update_many()
        .col_expr(
            blog_posts::Column::LikeCount,
            increment_expr(blog_posts::Column::LikeCount),
        )
        .col_expr(blog_posts::Column::UpdatedAt, SimpleExpr::from(Expr::current_timestamp()))
        .filter(blog_posts::Column::Id.eq(id))
}

fn monologue_increment(id: Uuid) -> UpdateMany<monologues::Entity> {
    monologues::Entity::update_many()
        .col_expr(
            monologues::Column::LikeCount,
            increment_expr(monologues::Column::LikeCount),
        )
        .col_expr(monologues::Column::UpdatedAt, SimpleExpr::from(Expr::current_timestamp()))
        .filter(monologues::Column::Id.eq(id))
}

#[async_trait]
impl LikeCounter for LikeCounterPostgres {
    async fn increment(&self, target: LikeTarget, id: Uuid) -> Result<i32, LikeCounterError> {
        let count = match target {
            LikeTarget::BlogPost => blog_post_increment(id)
                .exec_with_returning(&*self.db)
                .await
                .map_err(map_db_err)?
                .into_iter()
                .next()
                .map(|row| row.like_count),
            LikeTarget::Monologue => monologue_increment(id)
                .exec_with_returning(&*self.db)
                .await
                .map_err(map_db_err)?
                .into_iter()
                .next()
                .map(|row| row.like_count),
        };

        count.ok_or(LikeCounterError::NotFound)
    }
}

fn map_db_err(e: DbErr) -> LikeCounterError {
    match classify_db_err(&e) {
        StoreFailure::Unavailable(msg) => LikeCounterError::StoreUnavailable(msg),
        StoreFailure::UniqueViolation(msg)
        | StoreFailure::ForeignKeyViolation(msg)
        | StoreFailure::Other(msg) => {
            LikeCounterError::DatabaseError(msg)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, QueryTrait};

    use crate::monologue::adapter::outgoing::monologue_repository_postgres::tests::row as monologue_row;

    fn blog_row(id: Uuid, like_count: i32) -> blog_posts::Model {
        let now = Utc::now().fixed_offset();
        blog_posts::Model {
            id,
            title: "Hello".to_string(),
            slug: "hello".to_string(),
            excerpt: None,
            content: "Body".to_string(),
            cover_image_url: None,
            tags: vec![],
            status: "PUBLISHED".to_string(),
            seo_title: None,
            seo_description: None,
            published_at: Some(now),
            like_count,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_increment_is_one_statement() {
        let sql = blog_post_increment(Uuid::nil())
            .build(DatabaseBackend::Postgres)
            .to_string();

        assert!(sql.starts_with(r#"UPDATE "blog_posts""#), "{sql}");
        assert!(sql.contains(r#""like_count" = COALESCE("like_count", 0) + 1"#), "{sql}");
        assert!(sql.contains(r#""updated_at" = CURRENT_TIMESTAMP"#), "{sql}");
        assert!(!sql.contains("monologue_likes"), "{sql}");
    }

    #[test]
    fn test_monologue_increment_targets_monologues() {
        let sql = monologue_increment(Uuid::nil())
            .build(DatabaseBackend::Postgres)
            .to_string();

        assert!(sql.starts_with(r#"UPDATE "monologues""#), "{sql}");
    }

    #[tokio::test]
    async fn test_returns_post_increment_value() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![blog_row(id, 6)]])
            .into_connection();
        let counter = LikeCounterPostgres::new(Arc::new(db));

        assert_eq!(counter.increment(LikeTarget::BlogPost, id).await, Ok(6));
    }

    #[tokio::test]
    async fn test_monologue_like() {
        let mut row = monologue_row("liked");
        row.like_count = 3;
        let id = row.id;
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row]])
            .into_connection();
        let counter = LikeCounterPostgres::new(Arc::new(db));

        assert_eq!(counter.increment(LikeTarget::Monologue, id).await, Ok(3));
    }

    #[tokio::test]
    async fn test_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<monologues::Model>::new()])
            .into_connection();
        let counter = LikeCounterPostgres::new(Arc::new(db));

        assert_eq!(
            counter.increment(LikeTarget::Monologue, Uuid::new_v4()).await,
            Err(LikeCounterError::NotFound)
        );
    }
}
