use async_trait::async_trait;
use uuid::Uuid;

use super::SkillError;
use crate::skill::application::domain::entities::{PatchSkillData, Skill};

#[async_trait]
pub trait PatchSkillUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, data: PatchSkillData) -> Result<Skill, SkillError>;
}
