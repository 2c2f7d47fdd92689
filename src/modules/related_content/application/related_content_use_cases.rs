use std::sync::Arc;

use crate::related_content::application::ports::incoming::use_cases::GetRelatedContentUseCase;

#[derive(Clone)]
pub struct RelatedContentUseCases {
    pub get: Arc<dyn GetRelatedContentUseCase + Send + Sync>,
}
