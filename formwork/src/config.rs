//! Form controller configuration.

use serde::Deserialize;

/// Default message shown when a submission is accepted.
pub const DEFAULT_SUCCESS_MESSAGE: &str =
    "Message sent successfully! We will get in touch with you soon.";

/// Per-form configuration.
///
/// # Example
///
/// ```
/// use formwork::config::FormConfig;
///
/// let config = FormConfig::new("contact")
///     .with_success_message("Thanks!")
///     .focus_first_invalid(true);
/// assert_eq!(config.success_message, "Thanks!");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Name used in log output.
    pub name: String,

    /// Message passed to the adapter when a submission is accepted.
    pub success_message: String,

    /// Focus the first field in error after a rejected submit.
    ///
    /// Default: false
    pub focus_first_invalid: bool,

    /// Focus the first field after the form is reset.
    ///
    /// Default: true
    pub focus_after_reset: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            name: "form".to_string(),
            success_message: DEFAULT_SUCCESS_MESSAGE.to_string(),
            focus_first_invalid: false,
            focus_after_reset: true,
        }
    }
}

impl FormConfig {
    /// Create a config with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Parse a config from JSON. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Set the success message.
    pub fn with_success_message(mut self, message: impl Into<String>) -> Self {
        self.success_message = message.into();
        self
    }

    /// Set whether a rejected submit focuses the first invalid field.
    pub fn focus_first_invalid(mut self, enabled: bool) -> Self {
        self.focus_first_invalid = enabled;
        self
    }

    /// Set whether reset focuses the first field.
    pub fn focus_after_reset(mut self, enabled: bool) -> Self {
        self.focus_after_reset = enabled;
        self
    }
}
