mod blog_post_command_service;
mod blog_post_query_service;

pub use blog_post_command_service::{
    CreateBlogPostService, DeleteBlogPostService, PatchBlogPostService, PublishBlogPostService,
    UnpublishBlogPostService,
};
pub use blog_post_query_service::{GetBlogPostBySlugService, GetBlogPostsService};
