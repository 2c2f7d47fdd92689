use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::patch::PatchField;
use crate::shared::publication::PublishedAtChange;
use crate::shared::validation::{require_slug, require_text, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlogStatus {
    Draft,
    Published,
    Archived,
}

impl BlogStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            BlogStatus::Draft => "DRAFT",
            BlogStatus::Published => "PUBLISHED",
            BlogStatus::Archived => "ARCHIVED",
        }
    }
}

impl fmt::Display for BlogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlogStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DRAFT" => Ok(BlogStatus::Draft),
            "PUBLISHED" => Ok(BlogStatus::Published),
            "ARCHIVED" => Ok(BlogStatus::Archived),
            other => Err(format!("unknown blog status '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub cover_image_url: Option<String>,
    pub tags: Vec<String>,
    pub status: BlogStatus,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub like_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlogPost {
    pub fn is_published(&self) -> bool {
        self.status == BlogStatus::Published
    }
}

#[derive(Debug, Clone, Default)]
pub struct CreateBlogPostData {
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub cover_image_url: Option<String>,
    pub tags: Vec<String>,
    pub status: Option<BlogStatus>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlogPost {
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub cover_image_url: Option<String>,
    pub tags: Vec<String>,
    pub status: BlogStatus,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

impl NewBlogPost {
    /// Drafts by default. A post created as published is stamped with `now`.
    pub fn new(data: CreateBlogPostData, now: DateTime<Utc>) -> Result<Self, ValidationError> {
        let status = data.status.unwrap_or(BlogStatus::Draft);
        let published_at = (status == BlogStatus::Published).then_some(now);

        Ok(Self {
            title: require_text("title", data.title)?,
            slug: require_slug(data.slug)?,
            excerpt: data.excerpt,
            content: require_text("content", data.content)?,
            cover_image_url: data.cover_image_url,
            tags: data.tags,
            status,
            seo_title: data.seo_title,
            seo_description: data.seo_description,
            published_at,
        })
    }
}

/// PATCH input. The slug is the public key of a post and cannot be patched.
#[derive(Debug, Clone, Default)]
pub struct PatchBlogPostData {
    pub title: PatchField<String>,
    pub excerpt: PatchField<String>,
    pub content: PatchField<String>,
    pub cover_image_url: PatchField<String>,
    pub tags: PatchField<Vec<String>>,
    pub status: PatchField<BlogStatus>,
    pub seo_title: PatchField<String>,
    pub seo_description: PatchField<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogPostChanges {
    pub title: Option<String>,
    pub excerpt: Option<Option<String>>,
    pub content: Option<String>,
    pub cover_image_url: Option<Option<String>>,
    pub tags: Option<Vec<String>>,
    pub status: Option<BlogStatus>,
    pub published_at: Option<PublishedAtChange>,
    pub seo_title: Option<Option<String>>,
    pub seo_description: Option<Option<String>>,
}

impl BlogPostChanges {
    /// Moving to `Published` stamps `published_at` only if it was never set.
    /// Every other status leaves it alone.
    pub fn from_patch(
        patch: PatchBlogPostData,
        now: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let status = patch.status.into_required("status")?;
        let published_at = match status {
            Some(BlogStatus::Published) => Some(PublishedAtChange::StampIfUnset(now)),
            _ => None,
        };

        Ok(Self {
            title: patch
                .title
                .into_required("title")?
                .map(|v| require_text("title", v))
                .transpose()?,
            excerpt: patch.excerpt.into_nullable(),
            content: patch
                .content
                .into_required("content")?
                .map(|v| require_text("content", v))
                .transpose()?,
            cover_image_url: patch.cover_image_url.into_nullable(),
            tags: patch.tags.into_list(),
            status,
            published_at,
            seo_title: patch.seo_title.into_nullable(),
            seo_description: patch.seo_description.into_nullable(),
        })
    }

    pub fn publish(now: DateTime<Utc>) -> Self {
        Self {
            status: Some(BlogStatus::Published),
            published_at: Some(PublishedAtChange::StampIfUnset(now)),
            ..Default::default()
        }
    }

    /// Back to draft; the first publish date is kept.
    pub fn unpublish() -> Self {
        Self {
            status: Some(BlogStatus::Draft),
            ..Default::default()
        }
    }

    /// The post as the store holds it after this change set is written.
    pub fn apply_to(self, mut post: BlogPost, now: DateTime<Utc>) -> BlogPost {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(excerpt) = self.excerpt {
            post.excerpt = excerpt;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
        if let Some(cover) = self.cover_image_url {
            post.cover_image_url = cover;
        }
        if let Some(tags) = self.tags {
            post.tags = tags;
        }
        if let Some(status) = self.status {
            post.status = status;
        }
        if let Some(change) = self.published_at {
            post.published_at = change.apply_to(post.published_at);
        }
        if let Some(seo_title) = self.seo_title {
            post.seo_title = seo_title;
        }
        if let Some(seo_description) = self.seo_description {
            post.seo_description = seo_description;
        }
        post.updated_at = now;
        post
    }
}
