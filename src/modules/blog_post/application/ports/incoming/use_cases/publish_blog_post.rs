use async_trait::async_trait;
use uuid::Uuid;

use super::BlogPostError;
use crate::blog_post::application::domain::entities::BlogPost;

#[async_trait]
pub trait PublishBlogPostUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<BlogPost, BlogPostError>;
}

#[async_trait]
pub trait UnpublishBlogPostUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<BlogPost, BlogPostError>;
}
