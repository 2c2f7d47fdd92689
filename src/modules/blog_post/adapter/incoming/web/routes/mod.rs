mod create_blog_post;
mod delete_blog_post;
mod error_response;
mod get_blog_posts;
mod patch_blog_post;
mod publish_blog_post;

pub use create_blog_post::create_blog_post_handler;
pub use delete_blog_post::delete_blog_post_handler;
pub use get_blog_posts::{
    get_admin_blog_posts_handler, get_blog_post_by_slug_handler, get_blog_posts_handler,
};
pub use patch_blog_post::patch_blog_post_handler;
pub use publish_blog_post::{publish_blog_post_handler, unpublish_blog_post_handler};
