use async_trait::async_trait;

use crate::link_preview::application::domain::entities::PreviewMetadata;
use crate::link_preview::application::ports::incoming::use_cases::GenerateLinkPreviewUseCase;
use crate::link_preview::application::ports::outgoing::{LinkPreviewError, LinkPreviewGenerator};

pub struct GenerateLinkPreviewService<G: LinkPreviewGenerator> {
    generator: G,
}

impl<G: LinkPreviewGenerator> GenerateLinkPreviewService<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }
}

#[async_trait]
impl<G> GenerateLinkPreviewUseCase for GenerateLinkPreviewService<G>
where
    G: LinkPreviewGenerator + Send + Sync,
{
    async fn execute(&self, url: String) -> Result<PreviewMetadata, LinkPreviewError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(LinkPreviewError::EmptyUrl);
        }

        self.generator.generate(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link_preview::adapter::outgoing::PlaceholderPreviewGenerator;

    #[tokio::test]
    async fn test_blank_url_rejected() {
        let service = GenerateLinkPreviewService::new(PlaceholderPreviewGenerator);

        let result = service.execute("   ".to_string()).await;

        assert_eq!(result.unwrap_err(), LinkPreviewError::EmptyUrl);
    }

    #[tokio::test]
    async fn test_url_is_trimmed_before_generation() {
        let service = GenerateLinkPreviewService::new(PlaceholderPreviewGenerator);

        let preview = service
            .execute("  https://a.example  ".to_string())
            .await
            .unwrap();

        assert_eq!(preview.url, "https://a.example");
    }
}
