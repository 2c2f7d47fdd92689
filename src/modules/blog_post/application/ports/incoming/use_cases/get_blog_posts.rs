use async_trait::async_trait;

use super::BlogPostError;
use crate::blog_post::application::domain::entities::BlogPost;
use crate::shared::visibility::Visibility;

#[async_trait]
pub trait GetBlogPostsUseCase: Send + Sync {
    async fn execute(&self, visibility: Visibility) -> Result<Vec<BlogPost>, BlogPostError>;
}

#[async_trait]
pub trait GetBlogPostBySlugUseCase: Send + Sync {
    async fn execute(&self, slug: String) -> Result<BlogPost, BlogPostError>;
}
