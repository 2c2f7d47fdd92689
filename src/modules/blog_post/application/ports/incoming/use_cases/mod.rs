mod blog_post_error;
mod create_blog_post;
mod delete_blog_post;
mod get_blog_posts;
mod patch_blog_post;
mod publish_blog_post;

pub use blog_post_error::BlogPostError;
pub use create_blog_post::CreateBlogPostUseCase;
pub use delete_blog_post::DeleteBlogPostUseCase;
pub use get_blog_posts::{GetBlogPostBySlugUseCase, GetBlogPostsUseCase};
pub use patch_blog_post::PatchBlogPostUseCase;
pub use publish_blog_post::{PublishBlogPostUseCase, UnpublishBlogPostUseCase};
