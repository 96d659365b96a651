//! Validation rules and the per-field rule builder.
//!
//! Rules always see the trimmed value. A field's rules run in declaration
//! order and the first failure is the field's error.
//!
//! # Example
//!
//! ```
//! use formwork::rules::FieldRules;
//!
//! let rules = FieldRules::new()
//!     .required("Subject is required.")
//!     .min_length(3, "Subject must be at least 3 characters.");
//!
//! assert_eq!(rules.first_failure("Hi"), Some("Subject must be at least 3 characters."));
//! assert_eq!(rules.first_failure("Hello"), None);
//! ```

mod catalog;
mod spec;

pub use catalog::RuleCatalog;
pub use spec::{CatalogSpec, FieldSpec, RuleSpec};

use std::fmt;
use std::sync::{Arc, LazyLock};

use regex::Regex;

/// Type alias for rule predicates.
type Predicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s()-]{8,}$").expect("phone pattern"));

// Latin letters plus the Latin-1 accented range.
static LETTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-ZÀ-ÿ\s]+$").expect("letters pattern"));

/// A single pass/fail check with the message shown when it fails.
#[derive(Clone)]
pub struct Rule {
    check: Predicate,
    message: String,
}

impl Rule {
    /// Create a rule from a predicate that returns `true` for valid values.
    pub fn new<F>(check: F, message: impl Into<String>) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            check: Arc::new(check),
            message: message.into(),
        }
    }

    /// The failure message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Run the rule against an already-trimmed value.
    pub fn check(&self, value: &str) -> Result<(), &str> {
        if (self.check)(value) {
            Ok(())
        } else {
            Err(&self.message)
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Ordered rules for one field.
#[derive(Debug, Clone, Default)]
pub struct FieldRules {
    rules: Vec<Rule>,
    optional: bool,
}

impl FieldRules {
    /// Create an empty rule list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip every rule when the value is empty.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Whether empty values bypass the rules.
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// Add a custom rule.
    pub fn rule<F>(mut self, f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.rules.push(Rule::new(f, msg));
        self
    }

    /// Require the field to be non-empty.
    pub fn required(self, msg: impl Into<String>) -> Self {
        self.rule(|v| !v.is_empty(), msg)
    }

    /// Require minimum length (in characters).
    pub fn min_length(self, min: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v| v.chars().count() >= min, msg)
    }

    /// Require maximum length (in characters).
    pub fn max_length(self, max: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v| v.chars().count() <= max, msg)
    }

    /// Require the value to match a compiled pattern.
    pub fn pattern(self, re: Regex, msg: impl Into<String>) -> Self {
        self.rule(move |v| re.is_match(v), msg)
    }

    /// Require a `local@domain.tld` shaped address.
    pub fn email(self, msg: impl Into<String>) -> Self {
        self.rule(|v| EMAIL.is_match(v), msg)
    }

    /// Require an optional `+` followed by at least 8 digits, spaces,
    /// hyphens or parentheses.
    pub fn phone(self, msg: impl Into<String>) -> Self {
        self.rule(|v| PHONE.is_match(v), msg)
    }

    /// Require letters (accented included) and whitespace only.
    pub fn letters(self, msg: impl Into<String>) -> Self {
        self.rule(|v| LETTERS.is_match(v), msg)
    }

    /// The rules, in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules are declared.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Message of the first rule the trimmed value fails, if any.
    pub fn first_failure(&self, value: &str) -> Option<&str> {
        if self.optional && value.is_empty() {
            return None;
        }
        self.rules.iter().find_map(|rule| rule.check(value).err())
    }
}
