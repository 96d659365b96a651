//! Presentation adapter: the controller's only view of the UI.

use std::collections::HashMap;

use crate::field::FieldId;
use crate::store::ErrorMap;

/// Interface between the form controller and whatever displays the form.
///
/// Implementations read live field values, show the current errors and
/// carry out the side effects of submit and reset.
pub trait PresentationAdapter {
    /// Current raw value of a field. Unknown fields read as empty.
    fn read_value(&self, field: &FieldId) -> String;

    /// Show the current errors. Fields missing from `errors` are valid.
    fn render(&mut self, errors: &ErrorMap);

    /// Empty every field.
    fn clear_values(&mut self);

    /// Tell the user the form was accepted.
    fn notify_success(&mut self, message: &str);

    /// Move input focus to a field.
    fn focus(&mut self, _field: &FieldId) {}
}

/// In-memory adapter.
///
/// Holds field values and records everything the controller asks of it.
///
/// # Example
///
/// ```
/// use formwork::adapter::{MemoryAdapter, PresentationAdapter};
/// use formwork::field::FieldId;
///
/// let mut adapter = MemoryAdapter::new().with_value("name", "Ana");
/// assert_eq!(adapter.read_value(&FieldId::new("name")), "Ana");
///
/// adapter.clear_values();
/// assert_eq!(adapter.value("name"), "");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryAdapter {
    values: HashMap<FieldId, String>,
    rendered: ErrorMap,
    render_count: usize,
    notifications: Vec<String>,
    focused: Option<FieldId>,
}

impl MemoryAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`set_value`](Self::set_value).
    pub fn with_value(mut self, field: impl Into<FieldId>, value: impl Into<String>) -> Self {
        self.set_value(field, value);
        self
    }

    /// Replace a field's value, as typing would.
    pub fn set_value(&mut self, field: impl Into<FieldId>, value: impl Into<String>) {
        self.values.insert(field.into(), value.into());
    }

    /// Current value of a field (empty when never set).
    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    /// Whether every field is empty.
    pub fn is_blank(&self) -> bool {
        self.values.values().all(String::is_empty)
    }

    /// Errors passed to the most recent `render`.
    pub fn rendered(&self) -> &ErrorMap {
        &self.rendered
    }

    /// How many times `render` was called.
    pub fn render_count(&self) -> usize {
        self.render_count
    }

    /// Success messages shown so far.
    pub fn notifications(&self) -> &[String] {
        &self.notifications
    }

    /// Field that last received focus.
    pub fn focused(&self) -> Option<&FieldId> {
        self.focused.as_ref()
    }
}

impl PresentationAdapter for MemoryAdapter {
    fn read_value(&self, field: &FieldId) -> String {
        self.value(field.as_str()).to_string()
    }

    fn render(&mut self, errors: &ErrorMap) {
        self.rendered = errors.clone();
        self.render_count += 1;
    }

    fn clear_values(&mut self) {
        for value in self.values.values_mut() {
            value.clear();
        }
    }

    fn notify_success(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }

    fn focus(&mut self, field: &FieldId) {
        self.focused = Some(field.clone());
    }
}
