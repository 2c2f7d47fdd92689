use crate::code_category::application::ports::outgoing::CodeCategoryRepositoryError;
use crate::shared::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodeCategoryError {
    #[error("Code category not found")]
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

impl From<CodeCategoryRepositoryError> for CodeCategoryError {
    fn from(e: CodeCategoryRepositoryError) -> Self {
        match e {
            CodeCategoryRepositoryError::NotFound => CodeCategoryError::NotFound,
            CodeCategoryRepositoryError::SlugAlreadyExists => CodeCategoryError::SlugAlreadyExists,
            CodeCategoryRepositoryError::StoreUnavailable(msg) => {
                CodeCategoryError::StoreUnavailable(msg)
            }
            CodeCategoryRepositoryError::DatabaseError(msg) => {
                CodeCategoryError::RepositoryError(msg)
            }
        }
    }
}
