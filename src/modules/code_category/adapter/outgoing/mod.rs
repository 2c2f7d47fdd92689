pub mod code_category_repository_postgres;
pub mod sea_orm_entity;

pub use code_category_repository_postgres::CodeCategoryRepositoryPostgres;
