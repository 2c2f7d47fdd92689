use std::sync::Arc;

use crate::link_preview::application::ports::incoming::use_cases::GenerateLinkPreviewUseCase;

#[derive(Clone)]
pub struct LinkPreviewUseCases {
    pub generate: Arc<dyn GenerateLinkPreviewUseCase + Send + Sync>,
}
