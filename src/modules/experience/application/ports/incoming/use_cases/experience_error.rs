use crate::experience::application::ports::outgoing::ExperienceRepositoryError;
use crate::shared::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExperienceError {
    #[error("Experience not found")]
    NotFound,

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ExperienceRepositoryError> for ExperienceError {
    fn from(e: ExperienceRepositoryError) -> Self {
        match e {
            ExperienceRepositoryError::NotFound => ExperienceError::NotFound,
            ExperienceRepositoryError::StoreUnavailable(msg) => {
                ExperienceError::StoreUnavailable(msg)
            }
            ExperienceRepositoryError::DatabaseError(msg) => ExperienceError::RepositoryError(msg),
        }
    }
}
