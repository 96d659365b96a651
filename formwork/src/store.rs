//! Live error state of one form.

use std::collections::BTreeMap;

use crate::error::FieldValidationError;
use crate::field::{FieldId, FieldResult};

/// Fields currently in error, each with its message.
pub type ErrorMap = BTreeMap<FieldId, String>;

/// Holds the [`ErrorMap`] of a single form instance.
///
/// A field has an entry exactly when its last validation failed. None of the
/// operations can fail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorStore {
    errors: ErrorMap,
}

impl ErrorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or replace) the error of a field.
    pub fn set_error(&mut self, field: impl Into<FieldId>, message: impl Into<String>) {
        self.errors.insert(field.into(), message.into());
    }

    /// Remove the error of a field. Returns whether there was one.
    pub fn clear_error(&mut self, field: &str) -> bool {
        self.errors.remove(field).is_some()
    }

    pub fn clear_all(&mut self) {
        self.errors.clear();
    }

    /// Set or clear a field's entry from a validation result.
    pub fn apply(&mut self, field: &FieldId, result: &FieldResult) {
        match result {
            FieldResult::Invalid(msg) => self.set_error(field, msg.as_str()),
            FieldResult::Valid => {
                self.clear_error(field.as_str());
            }
        }
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// True when no field is in error.
    pub fn all_clear(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// First field of `order` that is in error.
    pub fn first_error_in<'a, I>(&self, order: I) -> Option<&'a FieldId>
    where
        I: IntoIterator<Item = &'a FieldId>,
    {
        order.into_iter().find(|field| self.has_error(field.as_str()))
    }

    /// The errors as owned values, in field-name order.
    pub fn to_errors(&self) -> Vec<FieldValidationError> {
        self.errors
            .iter()
            .map(|(field, msg)| FieldValidationError::new(field, msg.as_str()))
            .collect()
    }
}
