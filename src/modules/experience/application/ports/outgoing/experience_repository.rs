use async_trait::async_trait;
use uuid::Uuid;

use crate::experience::application::domain::entities::{
    Experience, ExperienceChanges, NewExperience,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExperienceRepositoryError {
    #[error("Experience not found")]
    NotFound,

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    /// Current roles first, then newest start date.
    async fn list(&self) -> Result<Vec<Experience>, ExperienceRepositoryError>;

    async fn create(&self, data: NewExperience) -> Result<Experience, ExperienceRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        changes: ExperienceChanges,
    ) -> Result<Experience, ExperienceRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<bool, ExperienceRepositoryError>;
}
