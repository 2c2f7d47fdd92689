use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::code_category::application::domain::entities::CodeCategory;
use crate::link_preview::application::domain::entities::UrlPreview;
use crate::shared::patch::PatchField;
use crate::shared::publication::PublishedAtChange;
use crate::shared::validation::{require_text, ValidationError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentType {
    #[default]
    Post,
    Code,
    Image,
    UrlPreview,
    Blog,
}

impl ContentType {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Post => "POST",
            ContentType::Code => "CODE",
            ContentType::Image => "IMAGE",
            ContentType::UrlPreview => "URL_PREVIEW",
            ContentType::Blog => "BLOG",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "POST" => Ok(ContentType::Post),
            "CODE" => Ok(ContentType::Code),
            "IMAGE" => Ok(ContentType::Image),
            "URL_PREVIEW" => Ok(ContentType::UrlPreview),
            "BLOG" => Ok(ContentType::Blog),
            other => Err(format!("unknown content type '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Beginner => "BEGINNER",
            Difficulty::Intermediate => "INTERMEDIATE",
            Difficulty::Advanced => "ADVANCED",
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BEGINNER" => Ok(Difficulty::Beginner),
            "INTERMEDIATE" => Ok(Difficulty::Intermediate),
            "ADVANCED" => Ok(Difficulty::Advanced),
            other => Err(format!("unknown difficulty '{other}'")),
        }
    }
}

/// A monologue as readers see it, with its category and preview embedded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Monologue {
    pub id: Uuid,
    pub content: String,
    pub content_type: ContentType,
    pub code_language: Option<String>,
    pub code_snippet: Option<String>,
    pub code_category_id: Option<Uuid>,
    pub code_category: Option<CodeCategory>,
    pub difficulty: Option<Difficulty>,
    pub tags: Vec<String>,
    pub url: Option<String>,
    pub url_preview: Option<UrlPreview>,
    pub series: Option<String>,
    pub category: Option<String>,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub like_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonologueFilter {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub category_id: Option<Uuid>,
    pub difficulty: Option<Difficulty>,
    /// Matches when any tag overlaps.
    pub tags: Vec<String>,
}

impl MonologueFilter {
    /// The store binds paging as signed 64-bit integers.
    pub const MAX_PAGE_VALUE: u64 = i64::MAX as u64;

    pub fn check_paging(&self) -> Result<(), String> {
        for (name, value) in [("limit", self.limit), ("offset", self.offset)] {
            if value.is_some_and(|v| v > Self::MAX_PAGE_VALUE) {
                return Err(format!("{name} must not exceed {}", Self::MAX_PAGE_VALUE));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonologuePage {
    pub nodes: Vec<Monologue>,
    pub total_count: u64,
    pub has_next_page: bool,
}

impl MonologuePage {
    /// `has_next_page` is only computed when the caller paged explicitly.
    pub fn new(nodes: Vec<Monologue>, total_count: u64, filter: &MonologueFilter) -> Self {
        let has_next_page = match (filter.limit, filter.offset) {
            (Some(limit), Some(offset)) => total_count > offset.saturating_add(limit),
            _ => false,
        };

        Self {
            nodes,
            total_count,
            has_next_page,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Create
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default)]
pub struct CreateMonologueData {
    pub content: String,
    pub content_type: ContentType,
    pub code_language: Option<String>,
    pub code_snippet: Option<String>,
    pub code_category_id: Option<Uuid>,
    pub difficulty: Option<Difficulty>,
    pub tags: Vec<String>,
    pub url: Option<String>,
    pub series: Option<String>,
    pub category: Option<String>,
    pub is_published: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMonologue {
    pub content: String,
    pub content_type: ContentType,
    pub code_language: Option<String>,
    pub code_snippet: Option<String>,
    pub code_category_id: Option<Uuid>,
    pub difficulty: Option<Difficulty>,
    pub tags: Vec<String>,
    pub url: Option<String>,
    pub series: Option<String>,
    pub category: Option<String>,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
}

impl NewMonologue {
    /// Unpublished by default. Created as published means stamped with `now`.
    pub fn new(data: CreateMonologueData, now: DateTime<Utc>) -> Result<Self, ValidationError> {
        Ok(Self {
            content: require_text("content", data.content)?,
            content_type: data.content_type,
            code_language: data.code_language,
            code_snippet: data.code_snippet,
            code_category_id: data.code_category_id,
            difficulty: data.difficulty,
            tags: data.tags,
            url: normalize_url(data.url),
            series: data.series,
            category: data.category,
            is_published: data.is_published,
            published_at: data.is_published.then_some(now),
        })
    }
}

/// A blank url is stored as no url.
fn normalize_url(url: Option<String>) -> Option<String> {
    url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty())
}

//
// ──────────────────────────────────────────────────────────
// Patch
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchMonologueData {
    pub content: PatchField<String>,
    pub content_type: PatchField<ContentType>,
    pub code_language: PatchField<String>,
    pub code_snippet: PatchField<String>,
    pub code_category_id: PatchField<Uuid>,
    pub difficulty: PatchField<Difficulty>,
    pub tags: PatchField<Vec<String>>,
    pub url: PatchField<String>,
    pub series: PatchField<String>,
    pub category: PatchField<String>,
    pub is_published: PatchField<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonologueChanges {
    pub content: Option<String>,
    pub content_type: Option<ContentType>,
    pub code_language: Option<Option<String>>,
    pub code_snippet: Option<Option<String>>,
    pub code_category_id: Option<Option<Uuid>>,
    pub difficulty: Option<Option<Difficulty>>,
    pub tags: Option<Vec<String>>,
    pub url: Option<Option<String>>,
    pub series: Option<Option<String>>,
    pub category: Option<Option<String>>,
    pub is_published: Option<bool>,
    pub published_at: Option<PublishedAtChange>,
}

impl MonologueChanges {
    /// Patching `is_published` to true stamps `published_at` only when it
    /// is still empty. Patching it to false leaves the timestamp alone.
    pub fn from_patch(patch: PatchMonologueData, now: DateTime<Utc>) -> Result<Self, ValidationError> {
        let content = patch
            .content
            .into_required("content")?
            .map(|c| require_text("content", c))
            .transpose()?;

        let is_published = patch.is_published.into_required("is_published")?;
        let published_at = match is_published {
            Some(true) => Some(PublishedAtChange::StampIfUnset(now)),
            _ => None,
        };

        Ok(Self {
            content,
            content_type: patch.content_type.into_required("content_type")?,
            code_language: patch.code_language.into_nullable(),
            code_snippet: patch.code_snippet.into_nullable(),
            code_category_id: patch.code_category_id.into_nullable(),
            difficulty: patch.difficulty.into_nullable(),
            tags: patch.tags.into_list(),
            url: patch.url.into_nullable().map(normalize_url),
            series: patch.series.into_nullable(),
            category: patch.category.into_nullable(),
            is_published,
            published_at,
        })
    }

    /// Explicit publish always re-stamps.
    pub fn publish(now: DateTime<Utc>) -> Self {
        Self {
            is_published: Some(true),
            published_at: Some(PublishedAtChange::Stamp(now)),
            ..Default::default()
        }
    }

    pub fn unpublish() -> Self {
        Self {
            is_published: Some(false),
            published_at: Some(PublishedAtChange::Clear),
            ..Default::default()
        }
    }

    /// `Some(None)` when the url is being cleared, `Some(Some(_))` when it is
    /// being replaced.
    pub fn url_change(&self) -> Option<Option<&str>> {
        self.url.as_ref().map(|u| u.as_deref())
    }

    /// What the store holds after this change set is applied to `monologue`.
    pub fn apply_to(self, mut monologue: Monologue, now: DateTime<Utc>) -> Monologue {
        if let Some(v) = self.content {
            monologue.content = v;
        }
        if let Some(v) = self.content_type {
            monologue.content_type = v;
        }
        if let Some(v) = self.code_language {
            monologue.code_language = v;
        }
        if let Some(v) = self.code_snippet {
            monologue.code_snippet = v;
        }
        if let Some(v) = self.code_category_id {
            monologue.code_category_id = v;
        }
        if let Some(v) = self.difficulty {
            monologue.difficulty = v;
        }
        if let Some(v) = self.tags {
            monologue.tags = v;
        }
        if let Some(v) = self.url {
            monologue.url = v;
        }
        if let Some(v) = self.series {
            monologue.series = v;
        }
        if let Some(v) = self.category {
            monologue.category = v;
        }
        if let Some(v) = self.is_published {
            monologue.is_published = v;
        }
        if let Some(change) = self.published_at {
            monologue.published_at = change.apply_to(monologue.published_at);
        }
        monologue.updated_at = now;
        monologue
    }
}
