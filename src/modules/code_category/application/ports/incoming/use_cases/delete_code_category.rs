use async_trait::async_trait;
use uuid::Uuid;

use super::CodeCategoryError;

#[async_trait]
pub trait DeleteCodeCategoryUseCase: Send + Sync {
    /// `NotFound` when nothing was deleted. Children and monologues that
    /// pointed at the category lose the reference.
    async fn execute(&self, id: Uuid) -> Result<(), CodeCategoryError>;
}
