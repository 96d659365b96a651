//! Validation engine for a contact form.
//!
//! A [`RuleCatalog`](rules::RuleCatalog) maps each field to an ordered list of
//! rules. The [`FieldValidator`](validator::FieldValidator) checks one value
//! against that list (first failure wins), the
//! [`ErrorStore`](store::ErrorStore) remembers which fields are currently in
//! error, and the [`FormController`](controller::FormController) drives both
//! from blur, input, submit and reset events. Rendering is left to a
//! [`PresentationAdapter`](adapter::PresentationAdapter).
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use formwork::prelude::*;
//!
//! let adapter = MemoryAdapter::new()
//!     .with_value("name", "Ana María")
//!     .with_value("email", "not-an-email");
//!
//! let mut form = FormController::new(
//!     Arc::new(RuleCatalog::contact_form()),
//!     adapter,
//!     FormConfig::default(),
//! );
//!
//! let outcome = form.submit();
//! assert!(!outcome.is_accepted());
//! assert!(form.store().has_error("email"));
//! ```

pub mod adapter;
pub mod config;
pub mod controller;
pub mod error;
pub mod field;
pub mod rules;
pub mod store;
pub mod validator;

pub mod prelude {
    pub use crate::adapter::{MemoryAdapter, PresentationAdapter};
    pub use crate::config::FormConfig;
    pub use crate::controller::{FormController, FormEvent, FormId, FormOutcome, FormState};
    pub use crate::error::{CatalogError, FieldValidationError};
    pub use crate::field::{FieldId, FieldResult};
    pub use crate::rules::{FieldRules, Rule, RuleCatalog};
    pub use crate::store::{ErrorMap, ErrorStore};
    pub use crate::validator::FieldValidator;
}
