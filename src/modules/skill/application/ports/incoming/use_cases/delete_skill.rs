use async_trait::async_trait;
use uuid::Uuid;

use super::SkillError;

#[async_trait]
pub trait DeleteSkillUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), SkillError>;
}
