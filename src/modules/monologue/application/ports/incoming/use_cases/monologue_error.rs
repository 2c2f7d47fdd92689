use crate::link_preview::application::ports::outgoing::UrlPreviewRepositoryError;
use crate::monologue::application::ports::outgoing::{
    MonologueQueryError, MonologueRepositoryError,
};
use crate::shared::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MonologueError {
    #[error("Monologue not found")]
    NotFound,

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<MonologueRepositoryError> for MonologueError {
    fn from(e: MonologueRepositoryError) -> Self {
        match e {
            MonologueRepositoryError::NotFound => MonologueError::NotFound,
            MonologueRepositoryError::UnknownCodeCategory => {
                MonologueError::Validation(ValidationError::Invalid {
                    field: "code_category_id",
                    reason: "no such code category".to_string(),
                })
            }
            MonologueRepositoryError::StoreUnavailable(msg) => MonologueError::StoreUnavailable(msg),
            MonologueRepositoryError::DatabaseError(msg) => MonologueError::RepositoryError(msg),
        }
    }
}

impl From<MonologueQueryError> for MonologueError {
    fn from(e: MonologueQueryError) -> Self {
        match e {
            MonologueQueryError::NotFound => MonologueError::NotFound,
            MonologueQueryError::StoreUnavailable(msg) => MonologueError::StoreUnavailable(msg),
            MonologueQueryError::DatabaseError(msg) => MonologueError::RepositoryError(msg),
        }
    }
}

impl From<UrlPreviewRepositoryError> for MonologueError {
    fn from(e: UrlPreviewRepositoryError) -> Self {
        match e {
            UrlPreviewRepositoryError::StoreUnavailable(msg) => {
                MonologueError::StoreUnavailable(msg)
            }
            UrlPreviewRepositoryError::DatabaseError(msg) => MonologueError::RepositoryError(msg),
        }
    }
}
