use async_trait::async_trait;
use uuid::Uuid;

use crate::code_category::application::domain::entities::{
    CodeCategory, CodeCategoryChanges, NewCodeCategory,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodeCategoryRepositoryError {
    #[error("Code category not found")]
    NotFound,

    #[error("Slug already exists")]
    SlugAlreadyExists,

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CodeCategoryRepository: Send + Sync {
    /// All categories ordered by name.
    async fn list(&self) -> Result<Vec<CodeCategory>, CodeCategoryRepositoryError>;

    async fn create(
        &self,
        data: NewCodeCategory,
    ) -> Result<CodeCategory, CodeCategoryRepositoryError>;

    /// Single UPDATE touching only the columns present in `changes`, plus
    /// `updated_at`.
    async fn update(
        &self,
        id: Uuid,
        changes: CodeCategoryChanges,
    ) -> Result<CodeCategory, CodeCategoryRepositoryError>;

    /// `false` when no row matched.
    async fn delete(&self, id: Uuid) -> Result<bool, CodeCategoryRepositoryError>;
}
