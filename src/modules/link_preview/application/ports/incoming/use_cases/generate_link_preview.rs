use async_trait::async_trait;

use crate::link_preview::application::domain::entities::PreviewMetadata;
use crate::link_preview::application::ports::outgoing::LinkPreviewError;

#[async_trait]
pub trait GenerateLinkPreviewUseCase: Send + Sync {
    async fn execute(&self, url: String) -> Result<PreviewMetadata, LinkPreviewError>;
}
