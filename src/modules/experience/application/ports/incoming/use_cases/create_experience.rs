use async_trait::async_trait;

use super::ExperienceError;
use crate::experience::application::domain::entities::{CreateExperienceData, Experience};

#[async_trait]
pub trait CreateExperienceUseCase: Send + Sync {
    async fn execute(&self, data: CreateExperienceData) -> Result<Experience, ExperienceError>;
}
