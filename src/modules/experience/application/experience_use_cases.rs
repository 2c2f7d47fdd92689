use std::sync::Arc;

use crate::experience::application::ports::incoming::use_cases::{
    CreateExperienceUseCase, DeleteExperienceUseCase, GetExperiencesUseCase,
    PatchExperienceUseCase,
};

#[derive(Clone)]
pub struct ExperienceUseCases {
    pub get_list: Arc<dyn GetExperiencesUseCase + Send + Sync>,
    pub create: Arc<dyn CreateExperienceUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchExperienceUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteExperienceUseCase + Send + Sync>,
}
