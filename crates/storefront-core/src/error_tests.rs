//! Tests for `error` module

use super::error::*;

#[test]
fn test_error_codes_are_unique() {
    // Arrange
    let errors: Vec<Error> = vec![
        Error::InvalidFacetValue {
            key: "color".into(),
            reason: "test".into(),
        },
        Error::InvalidFilter {
            field: "price".into(),
            reason: "test".into(),
        },
        Error::Config("test".into()),
        Error::Serialization("test".into()),
    ];

    // Act
    let codes: Vec<&str> = errors.iter().map(Error::code).collect();

    // Assert
    let mut unique_codes = codes.clone();
    unique_codes.sort_unstable();
    unique_codes.dedup();
    assert_eq!(codes.len(), unique_codes.len(), "Error codes must be unique");

    for code in &codes {
        assert!(
            code.starts_with("STORE-"),
            "Code {code} should start with STORE-"
        );
    }
}

#[test]
fn test_error_display_includes_code() {
    // Arrange
    let err = Error::InvalidFilter {
        field: "size".into(),
        reason: "unknown option 'XL'".into(),
    };

    // Act
    let display = format!("{err}");

    // Assert
    assert!(display.starts_with("[STORE-002]"));
    assert!(display.contains("size"));
    assert!(display.contains("XL"));
}

#[test]
fn test_from_serde_json_error() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();

    let err: Error = json_err.into();

    assert_eq!(err.code(), "STORE-004");
}

#[test]
fn test_from_config_error() {
    let config_err = crate::config::ConfigError::ParseError("bad toml".into());

    let err: Error = config_err.into();

    assert_eq!(err.code(), "STORE-003");
    assert!(err.to_string().contains("bad toml"));
}
