use crate::shared::validation::ValidationError;
use crate::skill::application::ports::outgoing::SkillRepositoryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkillError {
    #[error("Skill not found")]
    NotFound,

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<SkillRepositoryError> for SkillError {
    fn from(e: SkillRepositoryError) -> Self {
        match e {
            SkillRepositoryError::NotFound => SkillError::NotFound,
            SkillRepositoryError::StoreUnavailable(msg) => SkillError::StoreUnavailable(msg),
            SkillRepositoryError::DatabaseError(msg) => SkillError::RepositoryError(msg),
        }
    }
}
