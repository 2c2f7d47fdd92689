use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Metadata derived from a URL. Not yet tied to any monologue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewMetadata {
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub site_name: Option<String>,
    pub url: String,
    pub favicon: Option<String>,
}

/// A stored preview. Owned by exactly one monologue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlPreview {
    pub id: Uuid,
    pub monologue_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub site_name: Option<String>,
    pub url: String,
    pub favicon: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl UrlPreview {
    pub fn from_metadata(
        id: Uuid,
        monologue_id: Uuid,
        metadata: PreviewMetadata,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            monologue_id,
            title: metadata.title,
            description: metadata.description,
            image_url: metadata.image_url,
            site_name: metadata.site_name,
            url: metadata.url,
            favicon: metadata.favicon,
            created_at,
        }
    }
}
