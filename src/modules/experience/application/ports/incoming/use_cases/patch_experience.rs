use async_trait::async_trait;
use uuid::Uuid;

use super::ExperienceError;
use crate::experience::application::domain::entities::{Experience, PatchExperienceData};

#[async_trait]
pub trait PatchExperienceUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        data: PatchExperienceData,
    ) -> Result<Experience, ExperienceError>;
}
