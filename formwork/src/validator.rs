//! Single-field validation against a [`RuleCatalog`].

use std::sync::Arc;

use crate::field::{FieldId, FieldResult};
use crate::rules::RuleCatalog;
use crate::store::ErrorMap;

/// Checks field values against a shared catalog.
///
/// Validation is pure: the same field and value always give the same
/// result, and nothing is remembered between calls.
#[derive(Debug, Clone)]
pub struct FieldValidator {
    catalog: Arc<RuleCatalog>,
}

impl FieldValidator {
    /// Create a validator over a catalog.
    pub fn new(catalog: Arc<RuleCatalog>) -> Self {
        Self { catalog }
    }

    /// The catalog rules are read from.
    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// Validate one value. Undeclared fields are always valid.
    pub fn validate(&self, field: &str, raw: &str) -> FieldResult {
        let Some(rules) = self.catalog.field_rules(field) else {
            return FieldResult::Valid;
        };

        match rules.first_failure(raw.trim()) {
            Some(msg) => {
                log::trace!("[validate] {} invalid: {}", field, msg);
                FieldResult::Invalid(msg.to_string())
            }
            None => FieldResult::Valid,
        }
    }

    /// Validate every declared field, collecting the failures.
    ///
    /// `value_of` supplies each field's raw value; `None` counts as empty.
    pub fn validate_all<F>(&self, mut value_of: F) -> ErrorMap
    where
        F: FnMut(&FieldId) -> Option<String>,
    {
        let mut errors = ErrorMap::new();
        for field in self.catalog.fields() {
            let value = value_of(field).unwrap_or_default();
            if let FieldResult::Invalid(msg) = self.validate(field.as_str(), &value) {
                errors.insert(field.clone(), msg);
            }
        }
        errors
    }
}
