mod create_code_category;
mod delete_code_category;
mod error_response;
mod get_code_categories;
mod patch_code_category;

pub use create_code_category::create_code_category_handler;
pub use delete_code_category::delete_code_category_handler;
pub use get_code_categories::{get_code_categories_handler, get_code_category_hierarchy_handler};
pub use patch_code_category::patch_code_category_handler;
