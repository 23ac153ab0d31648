//! Conformance tests driven by the YAML fixtures in `tests/fixtures/`.
//!
//! Every case goes through all parse shapes, which must agree on both the
//! outcome and the message.

use serde::Deserialize;
use typeid::{validate, TypeId, Uuid};

#[derive(Debug, Deserialize)]
struct ValidCase {
    name: String,
    typeid: String,
    prefix: String,
    uuid: Uuid,
}

#[derive(Debug, Deserialize)]
struct InvalidCase {
    name: String,
    typeid: Option<String>,
    description: String,
    message: String,
}

fn load<T: for<'de> Deserialize<'de>>(file: &str) -> Vec<T> {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), file);
    let contents = std::fs::read_to_string(&path).unwrap();
    serde_yaml::from_str(&contents).unwrap()
}

fn valid_cases() -> Vec<ValidCase> {
    load("valid.yml")
}

fn invalid_cases() -> Vec<InvalidCase> {
    load("invalid.yml")
}

#[test]
fn test_fixtures_are_not_empty() {
    assert!(valid_cases().len() >= 10);
    assert!(invalid_cases().len() >= 20);
}

#[test]
fn test_encode_valid() {
    for case in valid_cases() {
        let id = TypeId::new(case.prefix.as_str(), case.uuid)
            .unwrap_or_else(|e| panic!("{}: {}", case.name, e));
        assert_eq!(id.to_string(), case.typeid, "{}", case.name);
    }
}

#[test]
fn test_decode_valid() {
    for case in valid_cases() {
        let id = TypeId::parse(&case.typeid).unwrap_or_else(|e| panic!("{}: {}", case.name, e));
        assert_eq!(id.prefix(), case.prefix, "{}", case.name);
        assert_eq!(id.uuid(), case.uuid, "{}", case.name);
    }
}

#[test]
fn test_valid_through_every_parse_shape() {
    for case in valid_cases() {
        let expected = TypeId::new(case.prefix.as_str(), case.uuid).unwrap();

        assert_eq!(
            TypeId::parse_to_option(&case.typeid).as_ref(),
            Some(&expected),
            "{}",
            case.name
        );
        assert_eq!(
            TypeId::parse_to_result(&case.typeid).as_ref(),
            Ok(&expected),
            "{}",
            case.name
        );
        assert_eq!(
            TypeId::parse_with(&case.typeid, Some, |_| None),
            Some(expected),
            "{}",
            case.name
        );
    }
}

#[test]
fn test_decode_invalid() {
    for case in invalid_cases() {
        let err = validate::parse_input(case.typeid.as_deref()).unwrap_err();
        assert_eq!(
            err.message(),
            case.message,
            "{} ({})",
            case.name,
            case.description
        );
    }
}

#[test]
fn test_invalid_through_every_parse_shape() {
    for case in invalid_cases() {
        let Some(text) = case.typeid.as_deref() else {
            continue;
        };

        let err = TypeId::parse(text).unwrap_err();
        assert_eq!(err.to_string(), case.message, "{}", case.name);
        assert_eq!(TypeId::parse_to_option(text), None, "{}", case.name);
        assert_eq!(
            TypeId::parse_to_result(text),
            Err(case.message.as_str()),
            "{}",
            case.name
        );
        assert_eq!(
            TypeId::parse_with(text, |_| String::new(), str::to_owned),
            case.message,
            "{}",
            case.name
        );
        assert!(!validate::is_valid(text), "{}", case.name);
    }
}

#[test]
fn test_invalid_text_rejected_by_serde() {
    for case in invalid_cases() {
        let Some(text) = case.typeid else {
            continue;
        };

        let json = serde_json::to_string(&text).unwrap();
        let err = serde_json::from_str::<TypeId>(&json).unwrap_err();
        assert!(err.to_string().contains(&case.message), "{}", case.name);
    }
}
