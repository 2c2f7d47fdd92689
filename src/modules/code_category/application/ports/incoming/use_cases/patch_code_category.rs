use async_trait::async_trait;
use uuid::Uuid;

use super::CodeCategoryError;
use crate::code_category::application::domain::entities::{CodeCategory, PatchCodeCategoryData};

#[async_trait]
pub trait PatchCodeCategoryUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        data: PatchCodeCategoryData,
    ) -> Result<CodeCategory, CodeCategoryError>;
}
