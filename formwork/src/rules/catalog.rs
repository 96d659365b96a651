use std::collections::HashMap;

use crate::field::FieldId;

use super::{FieldRules, Rule};

/// Mapping from field to its ordered rules.
///
/// Fields keep their declaration order; submit validates them in that order
/// and the first field in error is the one that gets focus.
#[derive(Debug, Clone, Default)]
pub struct RuleCatalog {
    order: Vec<FieldId>,
    fields: HashMap<FieldId, FieldRules>,
}

impl RuleCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field.
    ///
    /// Declaring a field again replaces its rules but keeps its position.
    pub fn with_field(mut self, field: impl Into<FieldId>, rules: FieldRules) -> Self {
        let field = field.into();
        if !self.fields.contains_key(&field) {
            self.order.push(field.clone());
        }
        self.fields.insert(field, rules);
        self
    }

    /// The rules of the contact form: name, email, phone, subject, message.
    pub fn contact_form() -> Self {
        Self::new()
            .with_field(
                "name",
                FieldRules::new()
                    .required("Name is required.")
                    .min_length(2, "Name must be at least 2 characters.")
                    .letters("Name may only contain letters and spaces."),
            )
            .with_field(
                "email",
                FieldRules::new()
                    .required("Email is required.")
                    .email("Enter a valid email address."),
            )
            .with_field(
                "phone",
                FieldRules::new()
                    .optional()
                    .phone("Enter a valid phone number."),
            )
            .with_field(
                "subject",
                FieldRules::new()
                    .required("Subject is required.")
                    .min_length(3, "Subject must be at least 3 characters."),
            )
            .with_field(
                "message",
                FieldRules::new()
                    .required("Message is required.")
                    .min_length(10, "Message must be at least 10 characters."),
            )
    }

    /// Rule list of a field, if it is declared.
    pub fn field_rules(&self, field: &str) -> Option<&FieldRules> {
        self.fields.get(field)
    }

    /// Ordered rules of a field; empty for undeclared fields.
    pub fn rules(&self, field: &str) -> &[Rule] {
        self.field_rules(field).map(FieldRules::rules).unwrap_or(&[])
    }

    /// Whether the field is declared.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Declared fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldId> {
        self.order.iter()
    }

    /// First declared field.
    pub fn first_field(&self) -> Option<&FieldId> {
        self.order.first()
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no fields are declared.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
