pub mod code_category_use_cases;
pub mod domain;
pub mod ports;
pub mod service;

pub use code_category_use_cases::CodeCategoryUseCases;
