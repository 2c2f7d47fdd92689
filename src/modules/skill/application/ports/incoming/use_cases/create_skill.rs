use async_trait::async_trait;

use super::SkillError;
use crate::skill::application::domain::entities::{CreateSkillData, Skill};

#[async_trait]
pub trait CreateSkillUseCase: Send + Sync {
    async fn execute(&self, data: CreateSkillData) -> Result<Skill, SkillError>;
}
