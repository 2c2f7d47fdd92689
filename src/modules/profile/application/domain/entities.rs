use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::patch::PatchField;
use crate::shared::validation::{require_text, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub social_links: Vec<SocialLink>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Links keep the order they were submitted in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    pub icon: Option<String>,
}

fn validate_links(links: Vec<SocialLink>) -> Result<Vec<SocialLink>, ValidationError> {
    links
        .into_iter()
        .map(|link| {
            Ok(SocialLink {
                platform: require_text("social_links.platform", link.platform)?,
                url: require_text("social_links.url", link.url)?,
                icon: link.icon,
            })
        })
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct CreateProfileData {
    pub name: String,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub social_links: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProfile {
    pub name: String,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub social_links: Vec<SocialLink>,
}

impl TryFrom<CreateProfileData> for NewProfile {
    type Error = ValidationError;

    fn try_from(data: CreateProfileData) -> Result<Self, Self::Error> {
        Ok(Self {
            name: require_text("name", data.name)?,
            title: data.title,
            bio: data.bio,
            avatar_url: data.avatar_url,
            social_links: validate_links(data.social_links)?,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct PatchProfileData {
    pub name: PatchField<String>,
    pub title: PatchField<String>,
    pub bio: PatchField<String>,
    pub avatar_url: PatchField<String>,
    pub social_links: PatchField<Vec<SocialLink>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileChanges {
    pub name: Option<String>,
    pub title: Option<Option<String>>,
    pub bio: Option<Option<String>>,
    pub avatar_url: Option<Option<String>>,
    /// `Some` replaces every stored link.
    pub social_links: Option<Vec<SocialLink>>,
}

impl TryFrom<PatchProfileData> for ProfileChanges {
    type Error = ValidationError;

    fn try_from(patch: PatchProfileData) -> Result<Self, Self::Error> {
        Ok(Self {
            name: patch
                .name
                .into_required("name")?
                .map(|v| require_text("name", v))
                .transpose()?,
            title: patch.title.into_nullable(),
            bio: patch.bio.into_nullable(),
            avatar_url: patch.avatar_url.into_nullable(),
            social_links: patch.social_links.into_list().map(validate_links).transpose()?,
        })
    }
}
