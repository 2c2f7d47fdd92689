use std::sync::Arc;

use crate::blog_post::application::ports::incoming::use_cases::{
    CreateBlogPostUseCase, DeleteBlogPostUseCase, GetBlogPostBySlugUseCase, GetBlogPostsUseCase,
    PatchBlogPostUseCase, PublishBlogPostUseCase, UnpublishBlogPostUseCase,
};

#[derive(Clone)]
pub struct BlogPostUseCases {
    pub get_list: Arc<dyn GetBlogPostsUseCase + Send + Sync>,
    pub get_by_slug: Arc<dyn GetBlogPostBySlugUseCase + Send + Sync>,
    pub create: Arc<dyn CreateBlogPostUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchBlogPostUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteBlogPostUseCase + Send + Sync>,
    pub publish: Arc<dyn PublishBlogPostUseCase + Send + Sync>,
    pub unpublish: Arc<dyn UnpublishBlogPostUseCase + Send + Sync>,
}
