use async_trait::async_trait;
use uuid::Uuid;

use crate::link_preview::application::domain::entities::{PreviewMetadata, UrlPreview};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlPreviewRepositoryError {
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UrlPreviewRepository: Send + Sync {
    /// Previews for the given monologues, at most one per monologue.
    async fn find_for_monologues(
        &self,
        monologue_ids: &[Uuid],
    ) -> Result<Vec<UrlPreview>, UrlPreviewRepositoryError>;

    async fn create(
        &self,
        monologue_id: Uuid,
        metadata: PreviewMetadata,
    ) -> Result<UrlPreview, UrlPreviewRepositoryError>;

    /// Returns the number of rows removed.
    async fn delete_for_monologue(
        &self,
        monologue_id: Uuid,
    ) -> Result<u64, UrlPreviewRepositoryError>;
}
