//! Declarative catalog description, loadable from JSON.
//!
//! ```
//! use formwork::rules::RuleCatalog;
//!
//! let catalog = RuleCatalog::from_json(r#"{
//!     "fields": [
//!         { "name": "nickname", "rules": [
//!             { "kind": "required", "message": "Nickname is required." },
//!             { "kind": "max_length", "max": 12, "message": "Too long." }
//!         ] },
//!         { "name": "zip", "optional": true, "rules": [
//!             { "kind": "pattern", "pattern": "^[0-9]{5}$", "message": "Five digits." }
//!         ] }
//!     ]
//! }"#).unwrap();
//!
//! assert_eq!(catalog.len(), 2);
//! ```

use std::collections::HashSet;
use std::io::Read;

use regex::Regex;
use serde::Deserialize;

use crate::error::CatalogError;

use super::{FieldRules, RuleCatalog};

/// A whole catalog: fields in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogSpec {
    pub fields: Vec<FieldSpec>,
}

/// One field and its rules.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub rules: Vec<RuleSpec>,
}

/// A rule, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleSpec {
    Required { message: String },
    MinLength { min: usize, message: String },
    MaxLength { max: usize, message: String },
    Pattern { pattern: String, message: String },
    Email { message: String },
    Phone { message: String },
    Letters { message: String },
}

impl CatalogSpec {
    /// Parse a catalog description from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a catalog description from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Compile every rule and build the catalog.
    pub fn build(self) -> Result<RuleCatalog, CatalogError> {
        let mut seen = HashSet::new();
        let mut catalog = RuleCatalog::new();

        for field in self.fields {
            if !seen.insert(field.name.clone()) {
                return Err(CatalogError::DuplicateField(field.name));
            }

            let mut rules = FieldRules::new();
            if field.optional {
                rules = rules.optional();
            }
            for rule in field.rules {
                rules = rule.apply(&field.name, rules)?;
            }

            log::trace!(
                "[catalog] field '{}' with {} rule(s)",
                field.name,
                rules.len()
            );
            catalog = catalog.with_field(field.name, rules);
        }

        Ok(catalog)
    }
}

impl RuleSpec {
    fn apply(self, field: &str, rules: FieldRules) -> Result<FieldRules, CatalogError> {
        let rules = match self {
            Self::Required { message } => rules.required(message),
            Self::MinLength { min, message } => rules.min_length(min, message),
            Self::MaxLength { max, message } => rules.max_length(max, message),
            Self::Pattern { pattern, message } => {
                let re = Regex::new(&pattern).map_err(|source| CatalogError::InvalidPattern {
                    field: field.to_string(),
                    source,
                })?;
                rules.pattern(re, message)
            }
            Self::Email { message } => rules.email(message),
            Self::Phone { message } => rules.phone(message),
            Self::Letters { message } => rules.letters(message),
        };
        Ok(rules)
    }
}

impl RuleCatalog {
    /// Build a catalog from its JSON description.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        CatalogSpec::from_json(json)?.build()
    }

    /// Build a catalog from a reader yielding its JSON description.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        CatalogSpec::from_reader(reader)?.build()
    }
}
