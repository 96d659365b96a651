//! Events a host delivers to a form controller.

use crate::field::FieldId;

/// A user or lifecycle event for one form.
///
/// Hosts forward these one at a time to
/// [`FormController::handle`](super::FormController::handle); each is
/// processed to completion before the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Focus left a field.
    Blur(FieldId),
    /// A field's value changed.
    Input(FieldId),
    /// The form was submitted.
    Submit,
    /// The clear button was pressed.
    Reset,
}

impl FormEvent {
    pub fn blur(field: impl Into<FieldId>) -> Self {
        Self::Blur(field.into())
    }

    pub fn input(field: impl Into<FieldId>) -> Self {
        Self::Input(field.into())
    }

    /// Field the event targets, for field-scoped events.
    pub fn field(&self) -> Option<&FieldId> {
        match self {
            Self::Blur(field) | Self::Input(field) => Some(field),
            Self::Submit | Self::Reset => None,
        }
    }

    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Blur(_) => "blur",
            Self::Input(_) => "input",
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }
}
