use std::sync::Arc;

use crate::code_category::application::ports::incoming::use_cases::{
    CreateCodeCategoryUseCase, DeleteCodeCategoryUseCase, GetCodeCategoriesUseCase,
    GetCodeCategoryHierarchyUseCase, PatchCodeCategoryUseCase,
};

#[derive(Clone)]
pub struct CodeCategoryUseCases {
    pub get_list: Arc<dyn GetCodeCategoriesUseCase + Send + Sync>,
    pub get_hierarchy: Arc<dyn GetCodeCategoryHierarchyUseCase + Send + Sync>,
    pub create: Arc<dyn CreateCodeCategoryUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchCodeCategoryUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteCodeCategoryUseCase + Send + Sync>,
}
