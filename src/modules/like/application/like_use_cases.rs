use std::sync::Arc;

use crate::like::application::ports::incoming::use_cases::{
    LikeBlogPostUseCase, LikeMonologueUseCase,
};

#[derive(Clone)]
pub struct LikeUseCases {
    pub blog_post: Arc<dyn LikeBlogPostUseCase + Send + Sync>,
    pub monologue: Arc<dyn LikeMonologueUseCase + Send + Sync>,
}
