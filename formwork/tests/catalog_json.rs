//! Tests for loading rule catalogs from JSON.

use std::sync::Arc;

use formwork::error::CatalogError;
use formwork::field::{FieldId, FieldResult};
use formwork::rules::{CatalogSpec, RuleCatalog, RuleSpec};
use formwork::validator::FieldValidator;

const CONTACT: &str = r#"{
    "fields": [
        { "name": "name", "rules": [
            { "kind": "required", "message": "Name is required." },
            { "kind": "min_length", "min": 2, "message": "Name must be at least 2 characters." },
            { "kind": "letters", "message": "Name may only contain letters and spaces." }
        ] },
        { "name": "email", "rules": [
            { "kind": "required", "message": "Email is required." },
            { "kind": "email", "message": "Enter a valid email address." }
        ] },
        { "name": "phone", "optional": true, "rules": [
            { "kind": "phone", "message": "Enter a valid phone number." }
        ] },
        { "name": "subject", "rules": [
            { "kind": "required", "message": "Subject is required." },
            { "kind": "min_length", "min": 3, "message": "Subject must be at least 3 characters." }
        ] },
        { "name": "message", "rules": [
            { "kind": "required", "message": "Message is required." },
            { "kind": "min_length", "min": 10, "message": "Message must be at least 10 characters." }
        ] }
    ]
}"#;

#[test]
fn test_json_catalog_matches_builtin() {
    let loaded = FieldValidator::new(Arc::new(RuleCatalog::from_json(CONTACT).unwrap()));
    let builtin = FieldValidator::new(Arc::new(RuleCatalog::contact_form()));

    let samples = [
        ("name", ""),
        ("name", "A"),
        ("name", "A1"),
        ("name", "José Luis"),
        ("email", "x"),
        ("email", "x@y.z"),
        ("phone", ""),
        ("phone", "123"),
        ("phone", "+34 600 000 000"),
        ("subject", "ab"),
        ("message", "0123456789"),
    ];
    for (field, value) in samples {
        assert_eq!(
            loaded.validate(field, value),
            builtin.validate(field, value),
            "{field}={value:?}"
        );
    }

    let order: Vec<&FieldId> = loaded.catalog().fields().collect();
    let expected: Vec<&FieldId> = builtin.catalog().fields().collect();
    assert_eq!(order, expected);
}

#[test]
fn test_custom_pattern_and_max_length() {
    let catalog = RuleCatalog::from_json(
        r#"{ "fields": [
            { "name": "zip", "optional": true, "rules": [
                { "kind": "pattern", "pattern": "^[0-9]{5}$", "message": "Five digits." }
            ] },
            { "name": "nick", "rules": [
                { "kind": "max_length", "max": 4, "message": "Too long." }
            ] }
        ] }"#,
    )
    .unwrap();
    let v = FieldValidator::new(Arc::new(catalog));

    assert_eq!(v.validate("zip", ""), FieldResult::Valid);
    assert_eq!(v.validate("zip", "28001"), FieldResult::Valid);
    assert_eq!(
        v.validate("zip", "2800"),
        FieldResult::Invalid("Five digits.".to_string())
    );
    assert_eq!(v.validate("nick", "abcd"), FieldResult::Valid);
    assert!(v.validate("nick", "abcde").is_invalid());
}

#[test]
fn test_field_without_rules_defaults() {
    let spec = CatalogSpec::from_json(r#"{ "fields": [ { "name": "notes" } ] }"#).unwrap();
    assert!(!spec.fields[0].optional);
    assert!(spec.fields[0].rules.is_empty());

    let catalog = spec.build().unwrap();
    assert!(catalog.contains("notes"));
    assert!(catalog.rules("notes").is_empty());
}

#[test]
fn test_rule_spec_tags() {
    let spec = CatalogSpec::from_json(
        r#"{ "fields": [ { "name": "a", "rules": [
            { "kind": "min_length", "min": 2, "message": "m" }
        ] } ] }"#,
    )
    .unwrap();
    assert_eq!(
        spec.fields[0].rules,
        vec![RuleSpec::MinLength {
            min: 2,
            message: "m".to_string()
        }]
    );
}

#[test]
fn test_invalid_pattern_is_reported() {
    let err = RuleCatalog::from_json(
        r#"{ "fields": [ { "name": "code", "rules": [
            { "kind": "pattern", "pattern": "([a-z", "message": "bad" }
        ] } ] }"#,
    )
    .unwrap_err();

    match err {
        CatalogError::InvalidPattern { field, .. } => assert_eq!(field, "code"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_duplicate_field_is_reported() {
    let err = RuleCatalog::from_json(r#"{ "fields": [ { "name": "a" }, { "name": "a" } ] }"#)
        .unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateField(ref name) if name == "a"));
    assert_eq!(err.to_string(), "field 'a' declared more than once");
}

#[test]
fn test_malformed_json_is_reported() {
    let err = RuleCatalog::from_json(r#"{ "fields": [ { "name": 3 } ] }"#).unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));

    let err = RuleCatalog::from_json(
        r#"{ "fields": [ { "name": "a", "rules": [ { "kind": "unknown", "message": "m" } ] } ] }"#,
    )
    .unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
}

#[test]
fn test_from_reader() {
    let catalog = RuleCatalog::from_reader(CONTACT.as_bytes()).unwrap();
    assert_eq!(catalog.len(), 5);
}
