//! A process-local stand-in for the content tables: blog posts, monologues,
//! their URL previews and like counters. Route tests drive the real services
//! through it.

use std::cmp::Reverse;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::blog_post::application::domain::entities::{
    BlogPost, BlogPostChanges, CreateBlogPostData, NewBlogPost,
};
use crate::blog_post::application::ports::outgoing::{
    BlogPostQuery, BlogPostQueryError, BlogPostRepository, BlogPostRepositoryError,
};
use crate::like::application::domain::entities::LikeTarget;
use crate::like::application::ports::outgoing::{LikeCounter, LikeCounterError};
use crate::link_preview::adapter::outgoing::PlaceholderPreviewGenerator;
use crate::link_preview::application::domain::entities::{PreviewMetadata, UrlPreview};
use crate::link_preview::application::ports::outgoing::{
    LinkPreviewGenerator, UrlPreviewRepository, UrlPreviewRepositoryError,
};
use crate::monologue::application::domain::entities::{
    CreateMonologueData, Monologue, MonologueChanges, MonologueFilter, MonologuePage,
    NewMonologue,
};
use crate::monologue::application::ports::outgoing::{
    MonologueQuery, MonologueQueryError, MonologueRepository, MonologueRepositoryError,
};
use crate::shared::visibility::Visibility;

#[derive(Default)]
struct State {
    blog_posts: Vec<BlogPost>,
    monologues: Vec<Monologue>,
    previews: Vec<UrlPreview>,
}

impl State {
    fn preview_for(&self, monologue_id: Uuid) -> Option<UrlPreview> {
        self.previews
            .iter()
            .filter(|p| p.monologue_id == monologue_id)
            .max_by_key(|p| p.created_at)
            .cloned()
    }

    /// Monologue rows don't hold their preview; attach it on the way out.
    fn embed(&self, mut monologue: Monologue) -> Monologue {
        monologue.url_preview = self.preview_for(monologue.id);
        monologue
    }
}

#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<RwLock<State>>,
}

impl InMemoryStore {
    pub async fn seed_blog_post(&self, data: CreateBlogPostData, now: DateTime<Utc>) -> BlogPost {
        let new = NewBlogPost::new(data, now).expect("valid seed post");
        BlogPostRepository::create(self, new)
            .await
            .expect("seed post stored")
    }

    /// Stores the monologue and, like the create path, its preview.
    pub async fn seed_monologue(&self, data: CreateMonologueData, now: DateTime<Utc>) -> Monologue {
        let new = NewMonologue::new(data, now).expect("valid seed monologue");
        let monologue = MonologueRepository::create(self, new)
            .await
            .expect("seed monologue stored");

        if let Some(url) = monologue.url.clone() {
            let metadata = PlaceholderPreviewGenerator
                .generate(&url)
                .await
                .expect("placeholder preview");
            UrlPreviewRepository::create(self, monologue.id, metadata)
                .await
                .expect("seed preview stored");
        }

        let state = self.state.read().await;
        state.embed(monologue)
    }

    pub async fn set_blog_post_likes(&self, id: Uuid, like_count: i32) {
        let mut state = self.state.write().await;
        if let Some(post) = state.blog_posts.iter_mut().find(|p| p.id == id) {
            post.like_count = like_count;
        }
    }

    pub async fn preview_count(&self) -> usize {
        self.state.read().await.previews.len()
    }

    pub async fn previews_for(&self, monologue_id: Uuid) -> Vec<UrlPreview> {
        self.state
            .read()
            .await
            .previews
            .iter()
            .filter(|p| p.monologue_id == monologue_id)
            .cloned()
            .collect()
    }
}

//
// ──────────────────────────────────────────────────────────
// Blog posts
// ──────────────────────────────────────────────────────────
//

#[async_trait]
impl BlogPostRepository for InMemoryStore {
    async fn create(&self, data: NewBlogPost) -> Result<BlogPost, BlogPostRepositoryError> {
        let mut state = self.state.write().await;
        if state.blog_posts.iter().any(|p| p.slug == data.slug) {
            return Err(BlogPostRepositoryError::SlugAlreadyExists);
        }

        let now = Utc::now();
        let post = BlogPost {
            id: Uuid::new_v4(),
            title: data.title,
            slug: data.slug,
            excerpt: data.excerpt,
            content: data.content,
            cover_image_url: data.cover_image_url,
            tags: data.tags,
            status: data.status,
            seo_title: data.seo_title,
            seo_description: data.seo_description,
            published_at: data.published_at,
            like_count: 0,
            created_at: now,
            updated_at: now,
        };
        state.blog_posts.push(post.clone());
        Ok(post)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: BlogPostChanges,
    ) -> Result<BlogPost, BlogPostRepositoryError> {
        let mut state = self.state.write().await;
        let slot = state
            .blog_posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(BlogPostRepositoryError::NotFound)?;

        *slot = changes.apply_to(slot.clone(), Utc::now());
        Ok(slot.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, BlogPostRepositoryError> {
        let mut state = self.state.write().await;
        let before = state.blog_posts.len();
        state.blog_posts.retain(|p| p.id != id);
        Ok(state.blog_posts.len() < before)
    }
}

#[async_trait]
impl BlogPostQuery for InMemoryStore {
    async fn list(&self, visibility: Visibility) -> Result<Vec<BlogPost>, BlogPostQueryError> {
        let state = self.state.read().await;
        let mut posts: Vec<BlogPost> = state
            .blog_posts
            .iter()
            .filter(|p| !visibility.is_public() || p.is_published())
            .cloned()
            .collect();

        match visibility {
            Visibility::Public => posts.sort_by_key(|p| Reverse(p.published_at)),
            Visibility::Admin => posts.sort_by_key(|p| Reverse(p.created_at)),
        }
        Ok(posts)
    }

    async fn find_by_slug(
        &self,
        slug: &str,
        visibility: Visibility,
    ) -> Result<BlogPost, BlogPostQueryError> {
        let state = self.state.read().await;
        state
            .blog_posts
            .iter()
            .find(|p| p.slug == slug && (!visibility.is_public() || p.is_published()))
            .cloned()
            .ok_or(BlogPostQueryError::NotFound)
    }
}

//
// ──────────────────────────────────────────────────────────
// Monologues
// ──────────────────────────────────────────────────────────
//

fn matches_filter(monologue: &Monologue, filter: &MonologueFilter) -> bool {
    if let Some(category_id) = filter.category_id {
        if monologue.code_category_id != Some(category_id) {
            return false;
        }
    }
    if let Some(difficulty) = filter.difficulty {
        if monologue.difficulty != Some(difficulty) {
            return false;
        }
    }
    filter.tags.is_empty() || filter.tags.iter().any(|t| monologue.tags.contains(t))
}

#[async_trait]
impl MonologueRepository for InMemoryStore {
    async fn create(&self, data: NewMonologue) -> Result<Monologue, MonologueRepositoryError> {
        let now = Utc::now();
        let monologue = Monologue {
            id: Uuid::new_v4(),
            content: data.content,
            content_type: data.content_type,
            code_language: data.code_language,
            code_snippet: data.code_snippet,
            code_category_id: data.code_category_id,
            code_category: None,
            difficulty: data.difficulty,
            tags: data.tags,
            url: data.url,
            url_preview: None,
            series: data.series,
            category: data.category,
            is_published: data.is_published,
            published_at: data.published_at,
            like_count: 0,
            created_at: now,
            updated_at: now,
        };

        self.state.write().await.monologues.push(monologue.clone());
        Ok(monologue)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: MonologueChanges,
    ) -> Result<Monologue, MonologueRepositoryError> {
        let mut state = self.state.write().await;
        let slot = state
            .monologues
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(MonologueRepositoryError::NotFound)?;

        *slot = changes.apply_to(slot.clone(), Utc::now());
        Ok(slot.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, MonologueRepositoryError> {
        let mut state = self.state.write().await;
        let before = state.monologues.len();
        state.monologues.retain(|m| m.id != id);
        Ok(state.monologues.len() < before)
    }
}

#[async_trait]
impl MonologueQuery for InMemoryStore {
    async fn list(
        &self,
        filter: &MonologueFilter,
        visibility: Visibility,
    ) -> Result<MonologuePage, MonologueQueryError> {
        let state = self.state.read().await;
        let mut matching: Vec<&Monologue> = state
            .monologues
            .iter()
            .filter(|m| !visibility.is_public() || m.is_published)
            .filter(|m| matches_filter(m, filter))
            .collect();

        match visibility {
            Visibility::Public => matching.sort_by_key(|m| Reverse(m.published_at)),
            Visibility::Admin => matching.sort_by_key(|m| Reverse(m.created_at)),
        }

        let total_count = matching.len() as u64;
        let offset = filter.offset.unwrap_or(0) as usize;
        let limit = filter.limit.map(|l| l as usize).unwrap_or(usize::MAX);

        let nodes = matching
            .into_iter()
            .skip(offset)
            .take(limit)
            .map(|m| state.embed(m.clone()))
            .collect();

        Ok(MonologuePage::new(nodes, total_count, filter))
    }

    async fn find_by_id(
        &self,
        id: Uuid,
        visibility: Visibility,
    ) -> Result<Monologue, MonologueQueryError> {
        let state = self.state.read().await;
        state
            .monologues
            .iter()
            .find(|m| m.id == id && (!visibility.is_public() || m.is_published))
            .map(|m| state.embed(m.clone()))
            .ok_or(MonologueQueryError::NotFound)
    }
}

//
// ──────────────────────────────────────────────────────────
// Previews and likes
// ──────────────────────────────────────────────────────────
//

#[async_trait]
impl UrlPreviewRepository for InMemoryStore {
    async fn find_for_monologues(
        &self,
        monologue_ids: &[Uuid],
    ) -> Result<Vec<UrlPreview>, UrlPreviewRepositoryError> {
        let state = self.state.read().await;
        Ok(monologue_ids
            .iter()
            .filter_map(|id| state.preview_for(*id))
            .collect())
    }

    async fn create(
        &self,
        monologue_id: Uuid,
        metadata: PreviewMetadata,
    ) -> Result<UrlPreview, UrlPreviewRepositoryError> {
        let preview = UrlPreview::from_metadata(Uuid::new_v4(), monologue_id, metadata, Utc::now());
        self.state.write().await.previews.push(preview.clone());
        Ok(preview)
    }

    async fn delete_for_monologue(
        &self,
        monologue_id: Uuid,
    ) -> Result<u64, UrlPreviewRepositoryError> {
        let mut state = self.state.write().await;
        let before = state.previews.len();
        state.previews.retain(|p| p.monologue_id != monologue_id);
        Ok((before - state.previews.len()) as u64)
    }
}

#[async_trait]
impl LikeCounter for InMemoryStore {
    async fn increment(&self, target: LikeTarget, id: Uuid) -> Result<i32, LikeCounterError> {
        let mut state = self.state.write().await;
        let (count, updated_at) = match target {
            LikeTarget::BlogPost => state
                .blog_posts
                .iter_mut()
                .find(|p| p.id == id)
                .map(|p| (&mut p.like_count, &mut p.updated_at)),
            LikeTarget::Monologue => state
                .monologues
                .iter_mut()
                .find(|m| m.id == id)
                .map(|m| (&mut m.like_count, &mut m.updated_at)),
        }
        .ok_or(LikeCounterError::NotFound)?;

        *count += 1;
        *updated_at = Utc::now();
        Ok(*count)
    }
}
