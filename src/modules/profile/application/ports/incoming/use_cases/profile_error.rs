use crate::profile::application::ports::outgoing::ProfileRepositoryError;
use crate::shared::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("Profile not found")]
    NotFound,

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ProfileRepositoryError> for ProfileError {
    fn from(e: ProfileRepositoryError) -> Self {
        match e {
            ProfileRepositoryError::NotFound => ProfileError::NotFound,
            ProfileRepositoryError::StoreUnavailable(msg) => ProfileError::StoreUnavailable(msg),
            ProfileRepositoryError::DatabaseError(msg) => ProfileError::RepositoryError(msg),
        }
    }
}
