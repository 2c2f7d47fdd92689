use async_trait::async_trait;
use uuid::Uuid;

use crate::skill::application::domain::entities::{NewSkill, Skill, SkillChanges};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkillRepositoryError {
    #[error("Skill not found")]
    NotFound,

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SkillRepository: Send + Sync {
    /// Ordered by `display_order`, then `name`.
    async fn list(&self) -> Result<Vec<Skill>, SkillRepositoryError>;

    async fn create(&self, data: NewSkill) -> Result<Skill, SkillRepositoryError>;

    async fn update(&self, id: Uuid, changes: SkillChanges) -> Result<Skill, SkillRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<bool, SkillRepositoryError>;
}
