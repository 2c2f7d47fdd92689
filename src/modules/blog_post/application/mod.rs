pub mod blog_post_use_cases;
pub mod domain;
pub mod ports;
pub mod service;

pub use blog_post_use_cases::BlogPostUseCases;
