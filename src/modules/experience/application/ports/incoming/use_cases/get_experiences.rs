use async_trait::async_trait;

use super::ExperienceError;
use crate::experience::application::domain::entities::Experience;

#[async_trait]
pub trait GetExperiencesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Experience>, ExperienceError>;
}
