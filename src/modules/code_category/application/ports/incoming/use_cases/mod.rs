mod code_category_error;
mod create_code_category;
mod delete_code_category;
mod get_code_categories;
mod patch_code_category;

pub use code_category_error::CodeCategoryError;
pub use create_code_category::CreateCodeCategoryUseCase;
pub use delete_code_category::DeleteCodeCategoryUseCase;
pub use get_code_categories::{GetCodeCategoriesUseCase, GetCodeCategoryHierarchyUseCase};
pub use patch_code_category::PatchCodeCategoryUseCase;
