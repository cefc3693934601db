//! Unit tests for domain error types

use std::error::Error as _;

use finder_domain::{Error, TypeLookupError};

#[test]
fn test_invalid_argument_error() {
    let error = Error::invalid_argument("Interface name cannot be empty");
    match error {
        Error::InvalidArgument { message } => assert_eq!(message, "Interface name cannot be empty"),
        _ => panic!("Expected InvalidArgument error"),
    }
}

#[test]
fn test_not_found_mentions_interface() {
    let error = Error::not_found("Greeter");
    assert_eq!(error.to_string(), "Implementation for interface 'Greeter' not found");
}

#[test]
fn test_implementation_not_found_keeps_lookup_error() {
    let error = Error::implementation_not_found(
        "SpanishGreeter",
        TypeLookupError::new("SpanishGreeter", "plugin"),
    );
    assert_eq!(error.to_string(), "Implementation 'SpanishGreeter' not found");
    let source = error.source().map(ToString::to_string);
    assert_eq!(
        source.as_deref(),
        Some("type 'SpanishGreeter' is not registered in loading scope 'plugin'")
    );
}

#[test]
fn test_instantiation_failed_keeps_cause() {
    let error = Error::instantiation_failed("BrokenGreeter", "constructor is private".into());
    match &error {
        Error::InstantiationFailed { implementation, source } => {
            assert_eq!(implementation, "BrokenGreeter");
            assert_eq!(source.to_string(), "constructor is private");
        }
        _ => panic!("Expected InstantiationFailed error"),
    }
    assert!(error.to_string().contains("not instantiated"));
}

#[test]
fn test_configuration_error_with_source() {
    let io = std::io::Error::other("permission denied");
    let error = Error::configuration_with_source("Failed to read finder.toml", io);
    assert!(error.source().is_some());
    assert_eq!(error.to_string(), "Configuration error: Failed to read finder.toml");
}
