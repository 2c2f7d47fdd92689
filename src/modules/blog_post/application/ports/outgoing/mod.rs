pub mod blog_post_query;
pub mod blog_post_repository;

pub use blog_post_query::{BlogPostQuery, BlogPostQueryError};
pub use blog_post_repository::{BlogPostRepository, BlogPostRepositoryError};
