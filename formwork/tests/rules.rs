//! Tests for the contact form rule catalog.

use std::sync::Arc;

use formwork::field::FieldResult;
use formwork::rules::RuleCatalog;
use formwork::validator::FieldValidator;

fn validator() -> FieldValidator {
    FieldValidator::new(Arc::new(RuleCatalog::contact_form()))
}

fn invalid(msg: &str) -> FieldResult {
    FieldResult::Invalid(msg.to_string())
}

#[test]
fn test_required_fields_reject_empty_and_whitespace() {
    let v = validator();
    let cases = [
        ("name", "Name is required."),
        ("email", "Email is required."),
        ("subject", "Subject is required."),
        ("message", "Message is required."),
    ];

    for (field, msg) in cases {
        assert_eq!(v.validate(field, ""), invalid(msg), "{field} empty");
        assert_eq!(v.validate(field, "   \t "), invalid(msg), "{field} blank");
    }
}

#[test]
fn test_phone_is_optional() {
    let v = validator();
    assert_eq!(v.validate("phone", ""), FieldResult::Valid);
    assert_eq!(v.validate("phone", "   "), FieldResult::Valid);
}

#[test]
fn test_name_rules() {
    let v = validator();
    assert_eq!(v.validate("name", "Ana María"), FieldResult::Valid);
    assert_eq!(
        v.validate("name", "A1"),
        invalid("Name may only contain letters and spaces.")
    );
    assert_eq!(
        v.validate("name", "A"),
        invalid("Name must be at least 2 characters.")
    );
    // Length is checked before the pattern.
    assert_eq!(
        v.validate("name", "1"),
        invalid("Name must be at least 2 characters.")
    );
}

#[test]
fn test_email_rules() {
    let v = validator();
    assert_eq!(v.validate("email", "a@b.co"), FieldResult::Valid);
    assert_eq!(
        v.validate("email", "not-an-email"),
        invalid("Enter a valid email address.")
    );
    assert!(v.validate("email", "a@b").is_invalid());
    assert!(v.validate("email", "a@b@c.co").is_invalid());
}

#[test]
fn test_phone_rules() {
    let v = validator();
    assert_eq!(
        v.validate("phone", "123"),
        invalid("Enter a valid phone number.")
    );
    assert_eq!(v.validate("phone", "+1 (555) 123-4567"), FieldResult::Valid);
    assert_eq!(v.validate("phone", "12345678"), FieldResult::Valid);
    assert!(v.validate("phone", "1234567").is_invalid());
    assert!(v.validate("phone", "555-CALL-NOW").is_invalid());
    assert!(v.validate("phone", "++12345678").is_invalid());
}

#[test]
fn test_subject_and_message_lengths() {
    let v = validator();
    assert!(v.validate("subject", "Hi").is_invalid());
    assert_eq!(v.validate("subject", "Hey"), FieldResult::Valid);

    assert_eq!(
        v.validate("message", "Hi there"),
        invalid("Message must be at least 10 characters.")
    );
    assert_eq!(v.validate("message", "Hi there!!"), FieldResult::Valid);
}

#[test]
fn test_values_are_trimmed() {
    let v = validator();
    assert_eq!(v.validate("email", "  a@b.co \n"), FieldResult::Valid);
    // Surrounding whitespace does not count toward the length.
    assert!(v.validate("message", "   Hi there   ").is_invalid());
}

#[test]
fn test_unknown_field_is_valid() {
    let v = validator();
    assert_eq!(v.validate("website", ""), FieldResult::Valid);
    assert_eq!(v.validate("website", "anything"), FieldResult::Valid);
}

#[test]
fn test_validate_all_collects_failures() {
    let v = validator();
    let errors = v.validate_all(|field| match field.as_str() {
        "name" => Some("Ana".to_string()),
        "email" => Some("broken".to_string()),
        "subject" => Some("Quote".to_string()),
        "message" => Some("Please call me back.".to_string()),
        _ => None,
    });

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.get("email").map(String::as_str),
        Some("Enter a valid email address.")
    );
}
