use serde::{Deserialize, Serialize};

use crate::shared::validation::ValidationError;

/// Tri-state field for PATCH bodies.
///
/// * key omitted  -> `Unset`, the column is left alone
/// * `null`       -> `Null`, the column is cleared
/// * any value    -> `Value(v)`, the column is overwritten
///
/// Request DTOs must mark these fields `#[serde(default)]` so an omitted key
/// lands on `Unset`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PatchField::Null)
    }

    pub fn as_value(&self) -> Option<&T> {
        match self {
            PatchField::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn map<U, F>(self, f: F) -> PatchField<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            PatchField::Unset => PatchField::Unset,
            PatchField::Null => PatchField::Null,
            PatchField::Value(v) => PatchField::Value(f(v)),
        }
    }

    /// For NOT NULL columns: `null` is rejected instead of cleared.
    pub fn into_required(self, field: &'static str) -> Result<Option<T>, ValidationError> {
        match self {
            PatchField::Unset => Ok(None),
            PatchField::Null => Err(ValidationError::NullNotAllowed(field)),
            PatchField::Value(v) => Ok(Some(v)),
        }
    }

    /// For nullable columns: outer `None` means untouched, `Some(None)` clears.
    pub fn into_nullable(self) -> Option<Option<T>> {
        match self {
            PatchField::Unset => None,
            PatchField::Null => Some(None),
            PatchField::Value(v) => Some(Some(v)),
        }
    }
}

impl<T> PatchField<Vec<T>> {
    /// Array columns have no NULL state; `null` clears to the empty list.
    pub fn into_list(self) -> Option<Vec<T>> {
        match self {
            PatchField::Unset => None,
            PatchField::Null => Some(Vec::new()),
            PatchField::Value(v) => Some(v),
        }
    }
}
