use async_trait::async_trait;
use uuid::Uuid;

use super::ExperienceError;

#[async_trait]
pub trait DeleteExperienceUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), ExperienceError>;
}
