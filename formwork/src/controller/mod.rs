//! Form controller: the validation lifecycle of one form instance.
//!
//! Blur validates a single field, input optimistically clears that field's
//! error, submit re-validates every field from scratch, and reset empties
//! the form. The controller owns its [`ErrorStore`] and reports every change
//! to the [`PresentationAdapter`] it was built with.
//!
//! ```text
//!            submit
//!   Idle ──────────────► Validating ──┬──► Accepted ──(reset)──► Idle
//!    ▲                                └──► Rejected ─────────────► Idle
//!    └── blur / input / reset (no state change)
//! ```

mod events;

pub use events::FormEvent;

use std::sync::Arc;

use log::{debug, info, trace};
use uuid::Uuid;

use crate::adapter::PresentationAdapter;
use crate::config::FormConfig;
use crate::field::{FieldId, FieldResult};
use crate::rules::RuleCatalog;
use crate::store::{ErrorMap, ErrorStore};
use crate::validator::FieldValidator;

/// Unique identifier for a form controller instance.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct FormId(Uuid);

impl FormId {
    /// Create a new unique form ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for FormId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for FormId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle state of a form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Idle,
    Validating,
    Rejected,
    Accepted,
}

/// Result of a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    /// Every field passed.
    Accepted,
    /// At least one field failed; the errors at the time of submit.
    Rejected(ErrorMap),
}

impl FormOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Errors of a rejected submission.
    pub fn errors(&self) -> Option<&ErrorMap> {
        match self {
            Self::Accepted => None,
            Self::Rejected(errors) => Some(errors),
        }
    }
}

/// Drives validation for one form.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use formwork::prelude::*;
///
/// let mut form = FormController::new(
///     Arc::new(RuleCatalog::contact_form()),
///     MemoryAdapter::new().with_value("email", "nope"),
///     FormConfig::new("contact"),
/// );
///
/// assert!(form.blur("email").is_invalid());
/// assert!(form.store().has_error("email"));
///
/// // Editing clears the error before the value is checked again.
/// form.adapter_mut().set_value("email", "still nope");
/// form.input("email");
/// assert!(form.store().all_clear());
/// ```
pub struct FormController<A> {
    id: FormId,
    validator: FieldValidator,
    store: ErrorStore,
    adapter: A,
    config: FormConfig,
    state: FormState,
    last_state: FormState,
}

impl<A: PresentationAdapter> FormController<A> {
    /// Wire a controller to its catalog, adapter and config.
    pub fn new(catalog: Arc<RuleCatalog>, adapter: A, config: FormConfig) -> Self {
        let id = FormId::new();
        debug!(
            "[form] '{}' ({}) created with {} field(s)",
            config.name,
            id,
            catalog.len()
        );
        Self {
            id,
            validator: FieldValidator::new(catalog),
            store: ErrorStore::new(),
            adapter,
            config,
            state: FormState::Idle,
            last_state: FormState::Idle,
        }
    }

    pub fn id(&self) -> FormId {
        self.id
    }

    /// Current state. Always `Idle` between events.
    pub fn state(&self) -> FormState {
        self.state
    }

    /// Terminal state of the most recent submit (`Idle` before any).
    pub fn last_state(&self) -> FormState {
        self.last_state
    }

    pub fn store(&self) -> &ErrorStore {
        &self.store
    }

    pub fn errors(&self) -> &ErrorMap {
        self.store.errors()
    }

    pub fn validator(&self) -> &FieldValidator {
        &self.validator
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    /// Dispatch an event. Returns the outcome for `Submit`.
    pub fn handle(&mut self, event: FormEvent) -> Option<FormOutcome> {
        trace!("[form] {} event: {:?}", self.id, event);
        match event {
            FormEvent::Blur(field) => {
                self.blur(field);
                None
            }
            FormEvent::Input(field) => {
                self.input(field.as_str());
                None
            }
            FormEvent::Submit => Some(self.submit()),
            FormEvent::Reset => {
                self.reset();
                None
            }
        }
    }

    /// Focus left a field: validate it alone.
    pub fn blur(&mut self, field: impl Into<FieldId>) -> FieldResult {
        let field = field.into();
        let result = self.validate_field(&field);
        debug!("[form] {} blur {}: {:?}", self.id, field, result);
        self.adapter.render(self.store.errors());
        result
    }

    /// A field's value changed: drop its error without re-validating.
    ///
    /// Returns whether an error was cleared.
    pub fn input(&mut self, field: &str) -> bool {
        if !self.store.clear_error(field) {
            return false;
        }
        debug!("[form] {} input {}: error cleared", self.id, field);
        self.adapter.render(self.store.errors());
        true
    }

    /// Validate every field and accept or reject the form.
    pub fn submit(&mut self) -> FormOutcome {
        self.transition(FormState::Validating);
        self.store.clear_all();

        let validator = self.validator.clone();
        let catalog = validator.catalog();
        for field in catalog.fields() {
            self.validate_field(field);
        }

        if self.store.all_clear() {
            self.transition(FormState::Accepted);
            self.last_state = FormState::Accepted;
            info!("[form] '{}' ({}) accepted", self.config.name, self.id);
            self.adapter.notify_success(&self.config.success_message);
            self.reset();
            return FormOutcome::Accepted;
        }

        self.transition(FormState::Rejected);
        self.last_state = FormState::Rejected;
        let errors = self.store.errors().clone();
        info!(
            "[form] '{}' ({}) rejected with {} error(s)",
            self.config.name,
            self.id,
            errors.len()
        );
        self.adapter.render(&errors);
        if self.config.focus_first_invalid {
            if let Some(first) = self.store.first_error_in(catalog.fields()) {
                self.adapter.focus(first);
            }
        }
        self.transition(FormState::Idle);
        FormOutcome::Rejected(errors)
    }

    /// Empty every field and drop every error.
    pub fn reset(&mut self) {
        self.adapter.clear_values();
        self.store.clear_all();
        self.adapter.render(self.store.errors());
        if self.config.focus_after_reset {
            if let Some(first) = self.validator.catalog().first_field() {
                self.adapter.focus(first);
            }
        }
        self.transition(FormState::Idle);
        debug!("[form] {} reset", self.id);
    }

    fn validate_field(&mut self, field: &FieldId) -> FieldResult {
        let value = self.adapter.read_value(field);
        let result = self.validator.validate(field.as_str(), &value);
        self.store.apply(field, &result);
        result
    }

    fn transition(&mut self, next: FormState) {
        if self.state != next {
            trace!("[form] {} {:?} -> {:?}", self.id, self.state, next);
            self.state = next;
        }
    }
}

impl<A> std::fmt::Debug for FormController<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormController")
            .field("id", &self.id)
            .field("name", &self.config.name)
            .field("state", &self.state)
            .field("errors", self.store.errors())
            .finish_non_exhaustive()
    }
}
