//! Tag-overlap matching between a monologue and the rest of the published
//! content.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::blog_post::application::domain::entities::BlogPost;
use crate::monologue::application::domain::entities::{ContentType, Monologue};

pub const DEFAULT_LIMIT: usize = 6;

const TITLE_CHARS: usize = 50;
const EXCERPT_CHARS: usize = 100;
const CHARS_PER_MINUTE: usize = 200;
const ELLIPSIS: &str = "...";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedContent {
    pub id: Uuid,
    pub title: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub excerpt: Option<String>,
    pub tags: Vec<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub read_time: usize,
}

impl RelatedContent {
    fn from_monologue(m: &Monologue) -> Self {
        Self {
            id: m.id,
            title: truncate(&m.content, TITLE_CHARS),
            content_type: ContentType::Post,
            excerpt: Some(truncate(&m.content, EXCERPT_CHARS)),
            tags: m.tags.clone(),
            published_at: m.published_at,
            read_time: read_time(&m.content),
        }
    }

    /// Blog candidates carry the same `POST` label as monologues; callers
    /// tell them apart by id.
    fn from_blog_post(post: &BlogPost) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            content_type: ContentType::Post,
            excerpt: post.excerpt.clone(),
            tags: post.tags.clone(),
            published_at: post.published_at,
            read_time: read_time(&post.content),
        }
    }
}

/// A caller-supplied limit only ever lowers the default cap.
pub fn effective_limit(requested: Option<usize>) -> usize {
    match requested {
        Some(n) if n < DEFAULT_LIMIT => n,
        _ => DEFAULT_LIMIT,
    }
}

/// Collects published monologues (other than the source) and then published
/// blog posts that share at least one tag with `source`, in input order,
/// stopping at `limit`. Overlap size plays no part in the ordering.
pub fn match_related(
    source: &Monologue,
    monologues: &[Monologue],
    posts: &[BlogPost],
    limit: usize,
) -> Vec<RelatedContent> {
    let related_monologues = monologues
        .iter()
        .filter(|m| m.id != source.id && m.is_published)
        .filter(|m| shares_tag(&source.tags, &m.tags))
        .map(RelatedContent::from_monologue);

    let related_posts = posts
        .iter()
        .filter(|p| p.is_published())
        .filter(|p| shares_tag(&source.tags, &p.tags))
        .map(RelatedContent::from_blog_post);

    related_monologues.chain(related_posts).take(limit).collect()
}

fn shares_tag(source: &[String], candidate: &[String]) -> bool {
    source.iter().any(|tag| candidate.contains(tag))
}

/// Cuts at a character count and always appends the ellipsis, even when
/// nothing was cut.
fn truncate(text: &str, max_chars: usize) -> String {
    let mut out: String = text.chars().take(max_chars).collect();
    out.push_str(ELLIPSIS);
    out
}

fn read_time(content: &str) -> usize {
    content.chars().count() / CHARS_PER_MINUTE + 1
}
