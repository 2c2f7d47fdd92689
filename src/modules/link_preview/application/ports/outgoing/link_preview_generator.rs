use async_trait::async_trait;

use crate::link_preview::application::domain::entities::PreviewMetadata;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinkPreviewError {
    #[error("url is required")]
    EmptyUrl,

    #[error("Preview generation failed: {0}")]
    GenerationFailed(String),
}

#[async_trait]
pub trait LinkPreviewGenerator: Send + Sync {
    async fn generate(&self, url: &str) -> Result<PreviewMetadata, LinkPreviewError>;
}
