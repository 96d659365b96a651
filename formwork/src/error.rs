//! Error types

use thiserror::Error;

use crate::field::FieldId;

/// A field that failed validation, with the message to show next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValidationError {
    /// The field that failed validation.
    pub field: FieldId,
    /// Human-readable validation error message.
    pub message: String,
}

impl FieldValidationError {
    /// Creates a new field validation error.
    pub fn new(field: impl Into<FieldId>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Errors raised while building a [`RuleCatalog`](crate::rules::RuleCatalog)
/// from a declarative description.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A `pattern` rule did not compile.
    #[error("invalid pattern for field '{field}': {source}")]
    InvalidPattern {
        /// Field the rule belongs to.
        field: String,
        /// Regex compilation error.
        #[source]
        source: regex::Error,
    },

    /// The same field appears twice.
    #[error("field '{0}' declared more than once")]
    DuplicateField(String),

    /// The catalog JSON could not be parsed.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}
