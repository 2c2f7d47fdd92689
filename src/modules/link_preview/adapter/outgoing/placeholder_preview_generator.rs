use async_trait::async_trait;

use crate::link_preview::application::domain::entities::PreviewMetadata;
use crate::link_preview::application::ports::outgoing::{LinkPreviewError, LinkPreviewGenerator};

const PLACEHOLDER_TITLE: &str = "Generated Preview";
const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/400x200";
const PLACEHOLDER_SITE: &str = "Example Site";
const PLACEHOLDER_FAVICON: &str = "https://via.placeholder.com/32x32";

/// Deterministic stand-in: no network access, same output for the same URL.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderPreviewGenerator;

#[async_trait]
impl LinkPreviewGenerator for PlaceholderPreviewGenerator {
    async fn generate(&self, url: &str) -> Result<PreviewMetadata, LinkPreviewError> {
        if url.trim().is_empty() {
            return Err(LinkPreviewError::EmptyUrl);
        }

        Ok(PreviewMetadata {
            title: PLACEHOLDER_TITLE.to_string(),
            description: Some(format!("This is a generated preview for {url}")),
            image_url: Some(PLACEHOLDER_IMAGE.to_string()),
            site_name: Some(PLACEHOLDER_SITE.to_string()),
            url: url.to_string(),
            favicon: Some(PLACEHOLDER_FAVICON.to_string()),
        })
    }
}
