use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// lowercase letters, digits and single hyphens between them
    static ref SLUG_REGEX: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
    static ref HEX_COLOR_REGEX: Regex = Regex::new(r"^#[0-9A-Fa-f]{6}$").unwrap();
    static ref PARTIAL_DATE_REGEX: Regex =
        Regex::new(r"^\d{4}-(0[1-9]|1[0-2])(-(0[1-9]|[12]\d|3[01]))?$").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{0} cannot be null")]
    NullNotAllowed(&'static str),

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },

    #[error("{field} is invalid: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Trims and rejects blank input.
pub fn require_text(field: &'static str, value: String) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(trimmed.to_string())
}

pub fn require_range(
    field: &'static str,
    value: i32,
    min: i32,
    max: i32,
) -> Result<i32, ValidationError> {
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field,
            min: min.into(),
            max: max.into(),
        });
    }
    Ok(value)
}

/// Lowercases then checks the slug shape.
pub fn require_slug(value: String) -> Result<String, ValidationError> {
    let slug = require_text("slug", value)?.to_lowercase();
    if !SLUG_REGEX.is_match(&slug) {
        return Err(ValidationError::Invalid {
            field: "slug",
            reason: "use lowercase letters, digits and hyphens".to_string(),
        });
    }
    Ok(slug)
}

pub fn require_hex_color(value: String) -> Result<String, ValidationError> {
    if !HEX_COLOR_REGEX.is_match(&value) {
        return Err(ValidationError::Invalid {
            field: "color",
            reason: "expected #RRGGBB".to_string(),
        });
    }
    Ok(value)
}

/// `YYYY-MM` or `YYYY-MM-DD`; stored as text so it sorts chronologically.
pub fn require_partial_date(field: &'static str, value: String) -> Result<String, ValidationError> {
    let value = require_text(field, value)?;
    if !PARTIAL_DATE_REGEX.is_match(&value) {
        return Err(ValidationError::Invalid {
            field,
            reason: "expected YYYY-MM or YYYY-MM-DD".to_string(),
        });
    }
    Ok(value)
}
