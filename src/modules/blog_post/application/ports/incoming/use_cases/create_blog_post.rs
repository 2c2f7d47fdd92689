use async_trait::async_trait;

use super::BlogPostError;
use crate::blog_post::application::domain::entities::{BlogPost, CreateBlogPostData};

#[async_trait]
pub trait CreateBlogPostUseCase: Send + Sync {
    async fn execute(&self, data: CreateBlogPostData) -> Result<BlogPost, BlogPostError>;
}
