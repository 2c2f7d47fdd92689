use async_trait::async_trait;

use super::SkillError;
use crate::skill::application::domain::entities::{Skill, SkillCategory};

#[async_trait]
pub trait GetSkillsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Skill>, SkillError>;
}

#[async_trait]
pub trait GetSkillsByCategoryUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<SkillCategory>, SkillError>;
}
