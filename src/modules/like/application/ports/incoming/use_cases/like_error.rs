use crate::like::application::ports::outgoing::LikeCounterError;
use crate::shared::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LikeError {
    #[error("Content not found")]
    NotFound,

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<LikeCounterError> for LikeError {
    fn from(e: LikeCounterError) -> Self {
        match e {
            LikeCounterError::NotFound => LikeError::NotFound,
            LikeCounterError::StoreUnavailable(msg) => LikeError::StoreUnavailable(msg),
            LikeCounterError::DatabaseError(msg) => LikeError::RepositoryError(msg),
        }
    }
}
