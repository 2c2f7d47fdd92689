use async_trait::async_trait;
use uuid::Uuid;

use crate::blog_post::application::ports::outgoing::BlogPostQueryError;
use crate::monologue::application::ports::outgoing::MonologueQueryError;
use crate::related_content::application::domain::matcher::RelatedContent;

/// A missing source monologue is not an error here; it yields an empty list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RelatedContentError {
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<MonologueQueryError> for RelatedContentError {
    fn from(e: MonologueQueryError) -> Self {
        match e {
            MonologueQueryError::StoreUnavailable(msg) => RelatedContentError::StoreUnavailable(msg),
            MonologueQueryError::NotFound => {
                RelatedContentError::RepositoryError("Monologue not found".to_string())
            }
            MonologueQueryError::DatabaseError(msg) => RelatedContentError::RepositoryError(msg),
        }
    }
}

impl From<BlogPostQueryError> for RelatedContentError {
    fn from(e: BlogPostQueryError) -> Self {
        match e {
            BlogPostQueryError::StoreUnavailable(msg) => RelatedContentError::StoreUnavailable(msg),
            BlogPostQueryError::NotFound => {
                RelatedContentError::RepositoryError("Blog post not found".to_string())
            }
            BlogPostQueryError::DatabaseError(msg) => RelatedContentError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait GetRelatedContentUseCase: Send + Sync {
    async fn execute(
        &self,
        monologue_id: Uuid,
        limit: Option<usize>,
    ) -> Result<Vec<RelatedContent>, RelatedContentError>;
}
