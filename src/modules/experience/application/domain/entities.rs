use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::shared::patch::PatchField;
use crate::shared::validation::{require_partial_date, require_text, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Experience {
    pub id: Uuid,
    pub company: String,
    pub position: String,
    pub description: Option<String>,
    pub start_date: String,
    pub end_date: Option<String>,
    pub is_current: bool,
    pub technologies: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateExperienceData {
    pub company: String,
    pub position: String,
    pub description: Option<String>,
    pub start_date: String,
    pub end_date: Option<String>,
    pub is_current: bool,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExperience {
    pub company: String,
    pub position: String,
    pub description: Option<String>,
    pub start_date: String,
    pub end_date: Option<String>,
    pub is_current: bool,
    pub technologies: Vec<String>,
}

fn current_with_end_date() -> ValidationError {
    ValidationError::Invalid {
        field: "end_date",
        reason: "must be empty while is_current is true".to_string(),
    }
}

impl TryFrom<CreateExperienceData> for NewExperience {
    type Error = ValidationError;

    fn try_from(data: CreateExperienceData) -> Result<Self, Self::Error> {
        let end_date = data
            .end_date
            .map(|d| require_partial_date("end_date", d))
            .transpose()?;

        if data.is_current && end_date.is_some() {
            return Err(current_with_end_date());
        }

        Ok(Self {
            company: require_text("company", data.company)?,
            position: require_text("position", data.position)?,
            description: data.description,
            start_date: require_partial_date("start_date", data.start_date)?,
            end_date,
            is_current: data.is_current,
            technologies: data.technologies,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct PatchExperienceData {
    pub company: PatchField<String>,
    pub position: PatchField<String>,
    pub description: PatchField<String>,
    pub start_date: PatchField<String>,
    pub end_date: PatchField<String>,
    pub is_current: PatchField<bool>,
    pub technologies: PatchField<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperienceChanges {
    pub company: Option<String>,
    pub position: Option<String>,
    pub description: Option<Option<String>>,
    pub start_date: Option<String>,
    pub end_date: Option<Option<String>>,
    pub is_current: Option<bool>,
    pub technologies: Option<Vec<String>>,
}

impl TryFrom<PatchExperienceData> for ExperienceChanges {
    type Error = ValidationError;

    fn try_from(patch: PatchExperienceData) -> Result<Self, Self::Error> {
        let mut end_date = patch
            .end_date
            .into_nullable()
            .map(|d| d.map(|v| require_partial_date("end_date", v)).transpose())
            .transpose()?;
        let mut is_current = patch.is_current.into_required("is_current")?;

        match (is_current, &end_date) {
            (Some(true), Some(Some(_))) => return Err(current_with_end_date()),
            // a current role has no end
            (Some(true), None) => end_date = Some(None),
            // an end date closes the role
            (None, Some(Some(_))) => is_current = Some(false),
            _ => {}
        }

        Ok(Self {
            company: patch
                .company
                .into_required("company")?
                .map(|v| require_text("company", v))
                .transpose()?,
            position: patch
                .position
                .into_required("position")?
                .map(|v| require_text("position", v))
                .transpose()?,
            description: patch.description.into_nullable(),
            start_date: patch
                .start_date
                .into_required("start_date")?
                .map(|v| require_partial_date("start_date", v))
                .transpose()?,
            end_date,
            is_current,
            technologies: patch.technologies.into_list(),
        })
    }
}
