use std::sync::Arc;

use crate::monologue::application::ports::incoming::use_cases::{
    CreateMonologueUseCase, DeleteMonologueUseCase, GetMonologueUseCase, GetMonologuesUseCase,
    PatchMonologueUseCase, PublishMonologueUseCase, UnpublishMonologueUseCase,
};

#[derive(Clone)]
pub struct MonologueUseCases {
    pub get_list: Arc<dyn GetMonologuesUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetMonologueUseCase + Send + Sync>,
    pub create: Arc<dyn CreateMonologueUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchMonologueUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteMonologueUseCase + Send + Sync>,
    pub publish: Arc<dyn PublishMonologueUseCase + Send + Sync>,
    pub unpublish: Arc<dyn UnpublishMonologueUseCase + Send + Sync>,
}
