pub mod blog_post_query_postgres;
pub mod blog_post_repository_postgres;
pub mod sea_orm_entity;

pub use blog_post_query_postgres::BlogPostQueryPostgres;
pub use blog_post_repository_postgres::BlogPostRepositoryPostgres;
