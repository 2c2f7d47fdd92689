use crate::blog_post::application::ports::outgoing::{
    BlogPostQueryError, BlogPostRepositoryError,
};
use crate::shared::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlogPostError {
    #[error("Blog post not found")]
    NotFound,

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Slug already exists")]
    SlugAlreadyExists,

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<BlogPostRepositoryError> for BlogPostError {
    fn from(e: BlogPostRepositoryError) -> Self {
        match e {
            BlogPostRepositoryError::NotFound => BlogPostError::NotFound,
            BlogPostRepositoryError::SlugAlreadyExists => BlogPostError::SlugAlreadyExists,
            BlogPostRepositoryError::StoreUnavailable(msg) => BlogPostError::StoreUnavailable(msg),
            BlogPostRepositoryError::DatabaseError(msg) => BlogPostError::RepositoryError(msg),
        }
    }
}

impl From<BlogPostQueryError> for BlogPostError {
    fn from(e: BlogPostQueryError) -> Self {
        match e {
            BlogPostQueryError::NotFound => BlogPostError::NotFound,
            BlogPostQueryError::StoreUnavailable(msg) => BlogPostError::StoreUnavailable(msg),
            BlogPostQueryError::DatabaseError(msg) => BlogPostError::RepositoryError(msg),
        }
    }
}
