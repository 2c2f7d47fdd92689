use async_trait::async_trait;
use uuid::Uuid;

use super::BlogPostError;
use crate::blog_post::application::domain::entities::{BlogPost, PatchBlogPostData};

#[async_trait]
pub trait PatchBlogPostUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, data: PatchBlogPostData)
        -> Result<BlogPost, BlogPostError>;
}
