use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::shared::patch::PatchField;
use crate::shared::validation::{require_hex_color, require_slug, require_text, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeCategory {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub parent_id: Option<Uuid>,
    pub color: Option<String>,
    pub icon: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Create
// ──────────────────────────────────────────────────────────
//

/// Raw create input as it arrives from the dispatcher.
#[derive(Debug, Clone, Default)]
pub struct CreateCodeCategoryData {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub parent_id: Option<Uuid>,
    pub color: Option<String>,
    pub icon: Option<String>,
}

/// Validated insert payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCodeCategory {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub parent_id: Option<Uuid>,
    pub color: Option<String>,
    pub icon: Option<String>,
}

impl TryFrom<CreateCodeCategoryData> for NewCodeCategory {
    type Error = ValidationError;

    fn try_from(data: CreateCodeCategoryData) -> Result<Self, Self::Error> {
        Ok(Self {
            name: require_text("name", data.name)?,
            slug: require_slug(data.slug)?,
            description: data.description,
            parent_id: data.parent_id,
            color: data.color.map(require_hex_color).transpose()?,
            icon: data.icon,
        })
    }
}

//
// ──────────────────────────────────────────────────────────
// Patch
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default)]
pub struct PatchCodeCategoryData {
    pub name: PatchField<String>,
    pub slug: PatchField<String>,
    pub description: PatchField<String>,
    pub parent_id: PatchField<Uuid>,
    pub color: PatchField<String>,
    pub icon: PatchField<String>,
}

/// Column-level change set. `None` leaves the column alone, `Some(None)`
/// clears a nullable column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeCategoryChanges {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<Option<String>>,
    pub parent_id: Option<Option<Uuid>>,
    pub color: Option<Option<String>>,
    pub icon: Option<Option<String>>,
}

impl TryFrom<PatchCodeCategoryData> for CodeCategoryChanges {
    type Error = ValidationError;

    fn try_from(patch: PatchCodeCategoryData) -> Result<Self, Self::Error> {
        let name = patch
            .name
            .into_required("name")?
            .map(|n| require_text("name", n))
            .transpose()?;

        let slug = patch.slug.into_required("slug")?.map(require_slug).transpose()?;

        let color = match patch.color.into_nullable() {
            Some(Some(c)) => Some(Some(require_hex_color(c)?)),
            other => other,
        };

        Ok(Self {
            name,
            slug,
            description: patch.description.into_nullable(),
            parent_id: patch.parent_id.into_nullable(),
            color,
            icon: patch.icon.into_nullable(),
        })
    }
}

impl CodeCategoryChanges {
    pub fn new_parent(&self) -> Option<Uuid> {
        self.parent_id.flatten()
    }
}
