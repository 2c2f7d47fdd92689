use async_trait::async_trait;

use crate::blog_post::application::domain::entities::BlogPost;
use crate::shared::visibility::Visibility;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlogPostQueryError {
    #[error("Blog post not found")]
    NotFound,

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait BlogPostQuery: Send + Sync {
    /// Public: published posts, newest publish first.
    /// Admin: every status, newest created first.
    async fn list(&self, visibility: Visibility) -> Result<Vec<BlogPost>, BlogPostQueryError>;

    async fn find_by_slug(
        &self,
        slug: &str,
        visibility: Visibility,
    ) -> Result<BlogPost, BlogPostQueryError>;
}
