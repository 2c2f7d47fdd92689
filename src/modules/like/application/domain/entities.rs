use serde::Serialize;
use uuid::Uuid;

use crate::shared::validation::ValidationError;

const BLOG_ID_PREFIX: &str = "blog-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeTarget {
    BlogPost,
    Monologue,
}

/// `is_liked` is always true: likes are never tracked per reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LikeResult {
    pub id: Uuid,
    pub like_count: i32,
    pub is_liked: bool,
}

impl LikeResult {
    pub fn new(id: Uuid, like_count: i32) -> Self {
        Self {
            id,
            like_count,
            is_liked: true,
        }
    }
}

/// Blog post ids may arrive as `blog-<uuid>`. A bare `blog-` is left alone
/// and fails to parse.
pub fn parse_blog_post_id(raw: &str) -> Result<Uuid, ValidationError> {
    let raw = raw.trim();
    let id = match raw.strip_prefix(BLOG_ID_PREFIX) {
        Some(rest) if !rest.is_empty() => rest,
        _ => raw,
    };
    parse_id(id)
}

pub fn parse_id(raw: &str) -> Result<Uuid, ValidationError> {
    Uuid::parse_str(raw.trim()).map_err(|_| ValidationError::Invalid {
        field: "id",
        reason: "expected a UUID".to_string(),
    })
}
