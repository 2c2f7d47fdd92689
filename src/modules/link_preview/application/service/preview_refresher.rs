use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::link_preview::application::domain::entities::UrlPreview;
use crate::link_preview::application::ports::outgoing::{
    LinkPreviewGenerator, UrlPreviewRepository, UrlPreviewRepositoryError,
};

/// Keeps a monologue's single preview in step with its `url`.
///
/// Generation and insert failures are logged and swallowed: the monologue
/// write that triggered them has already succeeded. The delete and the
/// insert are separate statements, so a crash in between leaves the
/// monologue without a preview.
#[derive(Clone)]
pub struct PreviewRefresher {
    generator: Arc<dyn LinkPreviewGenerator>,
    repository: Arc<dyn UrlPreviewRepository>,
}

impl PreviewRefresher {
    pub fn new(
        generator: Arc<dyn LinkPreviewGenerator>,
        repository: Arc<dyn UrlPreviewRepository>,
    ) -> Self {
        Self {
            generator,
            repository,
        }
    }

    /// Generates and stores a preview for a freshly created monologue.
    pub async fn attach(&self, monologue_id: Uuid, url: &str) -> Option<UrlPreview> {
        let url = url.trim();
        if url.is_empty() {
            return None;
        }

        let metadata = match self.generator.generate(url).await {
            Ok(m) => m,
            Err(e) => {
                warn!("Preview generation for monologue {} failed: {}", monologue_id, e);
                return None;
            }
        };

        match self.repository.create(monologue_id, metadata).await {
            Ok(preview) => {
                info!("Preview stored for monologue {}", monologue_id);
                Some(preview)
            }
            Err(e) => {
                warn!("Preview insert for monologue {} failed: {}", monologue_id, e);
                None
            }
        }
    }

    /// Delete-then-recreate. `None` or a blank url only deletes.
    pub async fn replace(&self, monologue_id: Uuid, url: Option<&str>) -> Option<UrlPreview> {
        if let Err(e) = self.repository.delete_for_monologue(monologue_id).await {
            warn!("Preview delete for monologue {} failed: {}", monologue_id, e);
        }

        match url {
            Some(url) => self.attach(monologue_id, url).await,
            None => None,
        }
    }

    pub async fn remove(&self, monologue_id: Uuid) -> Result<u64, UrlPreviewRepositoryError> {
        self.repository.delete_for_monologue(monologue_id).await
    }
}
