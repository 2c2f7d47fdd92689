use async_trait::async_trait;
use uuid::Uuid;

use super::BlogPostError;

#[async_trait]
pub trait DeleteBlogPostUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), BlogPostError>;
}
