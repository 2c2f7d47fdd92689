use async_trait::async_trait;
use tracing::debug;

use crate::like::application::domain::entities::{
    parse_blog_post_id, parse_id, LikeResult, LikeTarget,
};
use crate::like::application::ports::incoming::use_cases::{
    LikeBlogPostUseCase, LikeError, LikeMonologueUseCase,
};
use crate::like::application::ports::outgoing::LikeCounter;

pub struct LikeBlogPostService<C: LikeCounter> {
    counter: C,
}

impl<C: LikeCounter> LikeBlogPostService<C> {
    pub fn new(counter: C) -> Self {
        Self { counter }
    }
}

#[async_trait]
impl<C> LikeBlogPostUseCase for LikeBlogPostService<C>
where
    C: LikeCounter + Send + Sync,
{
    async fn execute(&self, raw_id: String) -> Result<LikeResult, LikeError> {
        let id = parse_blog_post_id(&raw_id)?;
        let like_count = self.counter.increment(LikeTarget::BlogPost, id).await?;

        debug!("Blog post {} now has {} likes", id, like_count);
        Ok(LikeResult::new(id, like_count))
    }
}

pub struct LikeMonologueService<C: LikeCounter> {
    counter: C,
}

impl<C: LikeCounter> LikeMonologueService<C> {
    pub fn new(counter: C) -> Self {
        Self { counter }
    }
}

#[async_trait]
impl<C> LikeMonologueUseCase for LikeMonologueService<C>
where
    C: LikeCounter + Send + Sync,
{
    async fn execute(&self, raw_id: String) -> Result<LikeResult, LikeError> {
        let id = parse_id(&raw_id)?;
        let like_count = self.counter.increment(LikeTarget::Monologue, id).await?;

        debug!("Monologue {} now has {} likes", id, like_count);
        Ok(LikeResult::new(id, like_count))
    }
}
