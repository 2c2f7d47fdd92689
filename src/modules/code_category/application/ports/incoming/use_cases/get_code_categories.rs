use async_trait::async_trait;

use super::CodeCategoryError;
use crate::code_category::application::domain::entities::CodeCategory;
use crate::code_category::application::domain::hierarchy::CodeCategoryNode;

#[async_trait]
pub trait GetCodeCategoriesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<CodeCategory>, CodeCategoryError>;
}

#[async_trait]
pub trait GetCodeCategoryHierarchyUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<CodeCategoryNode>, CodeCategoryError>;
}
