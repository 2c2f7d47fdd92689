use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::shared::patch::PatchField;
use crate::shared::validation::{require_range, require_text, ValidationError};

pub const MIN_LEVEL: i32 = 1;
pub const MAX_LEVEL: i32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub level: i32,
    pub icon_url: Option<String>,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillCategory {
    pub category: String,
    pub skills: Vec<Skill>,
}

/// Groups skills by category. Categories appear in the order their first
/// skill does, so a list sorted by `display_order` stays sorted.
pub fn group_by_category(skills: Vec<Skill>) -> Vec<SkillCategory> {
    let mut groups: Vec<SkillCategory> = Vec::new();

    for skill in skills {
        match groups.iter_mut().find(|g| g.category == skill.category) {
            Some(group) => group.skills.push(skill),
            None => groups.push(SkillCategory {
                category: skill.category.clone(),
                skills: vec![skill],
            }),
        }
    }

    groups
}

#[derive(Debug, Clone, Default)]
pub struct CreateSkillData {
    pub name: String,
    pub category: String,
    pub level: i32,
    pub icon_url: Option<String>,
    pub display_order: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSkill {
    pub name: String,
    pub category: String,
    pub level: i32,
    pub icon_url: Option<String>,
    pub display_order: i32,
}

impl TryFrom<CreateSkillData> for NewSkill {
    type Error = ValidationError;

    fn try_from(data: CreateSkillData) -> Result<Self, Self::Error> {
        Ok(Self {
            name: require_text("name", data.name)?,
            category: require_text("category", data.category)?,
            level: require_range("level", data.level, MIN_LEVEL, MAX_LEVEL)?,
            icon_url: data.icon_url,
            display_order: data.display_order.unwrap_or(0),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct PatchSkillData {
    pub name: PatchField<String>,
    pub category: PatchField<String>,
    pub level: PatchField<i32>,
    pub icon_url: PatchField<String>,
    pub display_order: PatchField<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillChanges {
    pub name: Option<String>,
    pub category: Option<String>,
    pub level: Option<i32>,
    pub icon_url: Option<Option<String>>,
    pub display_order: Option<i32>,
}

impl TryFrom<PatchSkillData> for SkillChanges {
    type Error = ValidationError;

    fn try_from(patch: PatchSkillData) -> Result<Self, Self::Error> {
        Ok(Self {
            name: patch
                .name
                .into_required("name")?
                .map(|v| require_text("name", v))
                .transpose()?,
            category: patch
                .category
                .into_required("category")?
                .map(|v| require_text("category", v))
                .transpose()?,
            level: patch
                .level
                .into_required("level")?
                .map(|v| require_range("level", v, MIN_LEVEL, MAX_LEVEL))
                .transpose()?,
            icon_url: patch.icon_url.into_nullable(),
            display_order: patch.display_order.into_required("display_order")?,
        })
    }
}
