use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::blog_post::application::domain::entities::{
    BlogPost, BlogPostChanges, CreateBlogPostData, NewBlogPost, PatchBlogPostData,
};
use crate::blog_post::application::ports::incoming::use_cases::{
    BlogPostError, CreateBlogPostUseCase, DeleteBlogPostUseCase, PatchBlogPostUseCase,
    PublishBlogPostUseCase, UnpublishBlogPostUseCase,
};
use crate::blog_post::application::ports::outgoing::BlogPostRepository;
use crate::shared::clock::Clock;

pub struct CreateBlogPostService<R: BlogPostRepository> {
    repository: R,
    clock: Arc<dyn Clock>,
}

impl<R: BlogPostRepository> CreateBlogPostService<R> {
    pub fn new(repository: R, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }
}

#[async_trait]
impl<R> CreateBlogPostUseCase for CreateBlogPostService<R>
where
    R: BlogPostRepository + Send + Sync,
{
    async fn execute(&self, data: CreateBlogPostData) -> Result<BlogPost, BlogPostError> {
        let new = NewBlogPost::new(data, self.clock.now())?;
        let post = self.repository.create(new).await?;

        info!("Created blog post {} ({})", post.id, post.status);
        Ok(post)
    }
}

pub struct PatchBlogPostService<R: BlogPostRepository> {
    repository: R,
    clock: Arc<dyn Clock>,
}

impl<R: BlogPostRepository> PatchBlogPostService<R> {
    pub fn new(repository: R, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }
}

#[async_trait]
impl<R> PatchBlogPostUseCase for PatchBlogPostService<R>
where
    R: BlogPostRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: Uuid,
        data: PatchBlogPostData,
    ) -> Result<BlogPost, BlogPostError> {
        let changes = BlogPostChanges::from_patch(data, self.clock.now())?;
        Ok(self.repository.update(id, changes).await?)
    }
}

pub struct DeleteBlogPostService<R: BlogPostRepository> {
    repository: R,
}

impl<R: BlogPostRepository> DeleteBlogPostService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteBlogPostUseCase for DeleteBlogPostService<R>
where
    R: BlogPostRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), BlogPostError> {
        if self.repository.delete(id).await? {
            info!("Deleted blog post {}", id);
            Ok(())
        } else {
            Err(BlogPostError::NotFound)
        }
    }
}

pub struct PublishBlogPostService<R: BlogPostRepository> {
    repository: R,
    clock: Arc<dyn Clock>,
}

impl<R: BlogPostRepository> PublishBlogPostService<R> {
    pub fn new(repository: R, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }
}

#[async_trait]
impl<R> PublishBlogPostUseCase for PublishBlogPostService<R>
where
    R: BlogPostRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<BlogPost, BlogPostError> {
        let changes = BlogPostChanges::publish(self.clock.now());
        Ok(self.repository.update(id, changes).await?)
    }
}

pub struct UnpublishBlogPostService<R: BlogPostRepository> {
    repository: R,
}

impl<R: BlogPostRepository> UnpublishBlogPostService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UnpublishBlogPostUseCase for UnpublishBlogPostService<R>
where
    R: BlogPostRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<BlogPost, BlogPostError> {
        Ok(self.repository.update(id, BlogPostChanges::unpublish()).await?)
    }
}
