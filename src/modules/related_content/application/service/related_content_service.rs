use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use crate::blog_post::application::ports::outgoing::BlogPostQuery;
use crate::monologue::application::domain::entities::MonologueFilter;
use crate::monologue::application::ports::outgoing::{MonologueQuery, MonologueQueryError};
use crate::related_content::application::domain::matcher::{
    effective_limit, match_related, RelatedContent,
};
use crate::related_content::application::ports::incoming::use_cases::{
    GetRelatedContentUseCase, RelatedContentError,
};
use crate::shared::visibility::Visibility;

pub struct RelatedContentService<M, B>
where
    M: MonologueQuery,
    B: BlogPostQuery,
{
    monologues: M,
    blog_posts: B,
}

impl<M, B> RelatedContentService<M, B>
where
    M: MonologueQuery,
    B: BlogPostQuery,
{
    pub fn new(monologues: M, blog_posts: B) -> Self {
        Self {
            monologues,
            blog_posts,
        }
    }
}

#[async_trait]
impl<M, B> GetRelatedContentUseCase for RelatedContentService<M, B>
where
    M: MonologueQuery + Send + Sync,
    B: BlogPostQuery + Send + Sync,
{
    async fn execute(
        &self,
        monologue_id: Uuid,
        limit: Option<usize>,
    ) -> Result<Vec<RelatedContent>, RelatedContentError> {
        let source = match self
            .monologues
            .find_by_id(monologue_id, Visibility::Admin)
            .await
        {
            Ok(source) => source,
            Err(MonologueQueryError::NotFound) => {
                debug!("Related content requested for unknown monologue {}", monologue_id);
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let limit = effective_limit(limit);
        if limit == 0 || source.tags.is_empty() {
            return Ok(Vec::new());
        }

        let monologues = self
            .monologues
            .list(&MonologueFilter::default(), Visibility::Public)
            .await?
            .nodes;
        let posts = self.blog_posts.list(Visibility::Public).await?;

        Ok(match_related(&source, &monologues, &posts, limit))
    }
}
