//! Unit tests for domain error types

use std::path::PathBuf;
use tagcheck_domain::Error;

#[test]
fn test_not_found_error() {
    let error = Error::not_found("indicators.rules");
    match error {
        Error::NotFound { resource } => assert_eq!(resource, "indicators.rules"),
        _ => panic!("Expected NotFound error"),
    }
}

#[test]
fn test_compile_error_names_the_file() {
    let error = Error::compile("rules/bad.rules", "syntax error at line 3");
    let display_str = format!("{}", error);
    assert!(display_str.contains("rules/bad.rules"));
    assert!(display_str.contains("syntax error at line 3"));

    match error {
        Error::Compile { path, .. } => assert_eq!(path, PathBuf::from("rules/bad.rules")),
        _ => panic!("Expected Compile error"),
    }
}

#[test]
fn test_variable_error_display() {
    let error = Error::variable("al_file_size", "expected integer, got string");
    assert_eq!(
        error.to_string(),
        "External variable 'al_file_size': expected integer, got string"
    );
}

#[test]
fn test_io_error_from_std() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let error: Error = io.into();
    assert!(matches!(error, Error::IoSimple { .. }));
}

#[test]
fn test_configuration_with_source() {
    let io = std::io::Error::other("unreadable");
    let error = Error::configuration_with_source("bad config", io);
    match error {
        Error::Configuration { message, source } => {
            assert_eq!(message, "bad config");
            assert!(source.is_some());
        }
        _ => panic!("Expected Configuration error"),
    }
}
