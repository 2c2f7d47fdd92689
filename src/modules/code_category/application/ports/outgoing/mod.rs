pub mod code_category_repository;

pub use code_category_repository::{CodeCategoryRepository, CodeCategoryRepositoryError};
