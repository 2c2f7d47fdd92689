use std::sync::Arc;

use crate::skill::application::ports::incoming::use_cases::{
    CreateSkillUseCase, DeleteSkillUseCase, GetSkillsByCategoryUseCase, GetSkillsUseCase,
    PatchSkillUseCase,
};

#[derive(Clone)]
pub struct SkillUseCases {
    pub get_list: Arc<dyn GetSkillsUseCase + Send + Sync>,
    pub get_by_category: Arc<dyn GetSkillsByCategoryUseCase + Send + Sync>,
    pub create: Arc<dyn CreateSkillUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchSkillUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteSkillUseCase + Send + Sync>,
}
