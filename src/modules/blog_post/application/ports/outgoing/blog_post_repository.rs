use async_trait::async_trait;
use uuid::Uuid;

use crate::blog_post::application::domain::entities::{BlogPost, BlogPostChanges, NewBlogPost};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlogPostRepositoryError {
    #[error("Blog post not found")]
    NotFound,

    #[error("Slug already exists")]
    SlugAlreadyExists,

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait BlogPostRepository: Send + Sync {
    async fn create(&self, data: NewBlogPost) -> Result<BlogPost, BlogPostRepositoryError>;

    /// One UPDATE; returns the row as stored afterwards.
    async fn update(
        &self,
        id: Uuid,
        changes: BlogPostChanges,
    ) -> Result<BlogPost, BlogPostRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<bool, BlogPostRepositoryError>;
}
