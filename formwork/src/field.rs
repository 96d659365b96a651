//! Field identifiers and per-field validation results.

use std::borrow::Borrow;
use std::fmt;

use crate::error::FieldValidationError;

/// Name of a form field (`name`, `email`, ...).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldId(String);

impl FieldId {
    /// Create a new field ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the field name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for FieldId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&FieldId> for FieldId {
    fn from(id: &FieldId) -> Self {
        id.clone()
    }
}

impl Borrow<str> for FieldId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for FieldId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Result of validating a single field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldResult {
    /// Every rule passed (or the field has no rules).
    #[default]
    Valid,
    /// The first failing rule's message.
    Invalid(String),
}

impl FieldResult {
    /// Check if the field passed validation.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Check if the field failed validation.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Get the failure message (if any).
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid(msg) => Some(msg),
        }
    }

    /// Attach the field name to a failure.
    pub fn into_error(self, field: impl Into<FieldId>) -> Option<FieldValidationError> {
        match self {
            Self::Valid => None,
            Self::Invalid(msg) => Some(FieldValidationError::new(field, msg)),
        }
    }
}
