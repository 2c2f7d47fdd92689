use async_trait::async_trait;

use super::LikeError;
use crate::like::application::domain::entities::LikeResult;

/// Accepts `<uuid>` or `blog-<uuid>`.
#[async_trait]
pub trait LikeBlogPostUseCase: Send + Sync {
    async fn execute(&self, raw_id: String) -> Result<LikeResult, LikeError>;
}

#[async_trait]
pub trait LikeMonologueUseCase: Send + Sync {
    async fn execute(&self, raw_id: String) -> Result<LikeResult, LikeError>;
}
