use async_trait::async_trait;

use super::CodeCategoryError;
use crate::code_category::application::domain::entities::{CodeCategory, CreateCodeCategoryData};

#[async_trait]
pub trait CreateCodeCategoryUseCase: Send + Sync {
    async fn execute(&self, data: CreateCodeCategoryData)
        -> Result<CodeCategory, CodeCategoryError>;
}
