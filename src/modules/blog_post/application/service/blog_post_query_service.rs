use async_trait::async_trait;

use crate::blog_post::application::domain::entities::BlogPost;
use crate::blog_post::application::ports::incoming::use_cases::{
    BlogPostError, GetBlogPostBySlugUseCase, GetBlogPostsUseCase,
};
use crate::blog_post::application::ports::outgoing::BlogPostQuery;
use crate::shared::visibility::Visibility;

pub struct GetBlogPostsService<Q: BlogPostQuery> {
    query: Q,
}

impl<Q: BlogPostQuery> GetBlogPostsService<Q> {
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetBlogPostsUseCase for GetBlogPostsService<Q>
where
    Q: BlogPostQuery + Send + Sync,
{
    async fn execute(&self, visibility: Visibility) -> Result<Vec<BlogPost>, BlogPostError> {
        Ok(self.query.list(visibility).await?)
    }
}

/// Public lookup: drafts and archived posts are reported as missing.
pub struct GetBlogPostBySlugService<Q: BlogPostQuery> {
    query: Q,
}

impl<Q: BlogPostQuery> GetBlogPostBySlugService<Q> {
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetBlogPostBySlugUseCase for GetBlogPostBySlugService<Q>
where
    Q: BlogPostQuery + Send + Sync,
{
    async fn execute(&self, slug: String) -> Result<BlogPost, BlogPostError> {
        let slug = slug.trim().to_lowercase();
        Ok(self.query.find_by_slug(&slug, Visibility::Public).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blog_post::application::ports::outgoing::BlogPostQueryError;
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        pub Query {}
        #[async_trait]
        impl BlogPostQuery for Query {
            async fn list(&self, visibility: Visibility) -> Result<Vec<BlogPost>, BlogPostQueryError>;
            async fn find_by_slug(&self, slug: &str, visibility: Visibility) -> Result<BlogPost, BlogPostQueryError>;
        }
    }

    #[tokio::test]
    async fn test_list_forwards_visibility() {
        let mut query = MockQuery::new();
        query
            .expect_list()
            .with(eq(Visibility::Admin))
            .times(1)
            .returning(|_| Ok(vec![]));

        let result = GetBlogPostsService::new(query)
            .execute(Visibility::Admin)
            .await
            .unwrap();

        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_slug_lookup_is_public_and_normalized() {
        let mut query = MockQuery::new();
        query
            .expect_find_by_slug()
            .withf(|slug, visibility| slug == "hello-world" && *visibility == Visibility::Public)
            .returning(|_, _| Err(BlogPostQueryError::NotFound));

        let result = GetBlogPostBySlugService::new(query)
            .execute(" Hello-World ".to_string())
            .await;

        assert_eq!(result.unwrap_err(), BlogPostError::NotFound);
    }
}
