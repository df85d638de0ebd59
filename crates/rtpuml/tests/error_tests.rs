//! Tests for generator error types

use rtpuml::core::GeneratorError;
use rtpuml::model::Model;
use std::error::Error;
use std::io;

#[test]
fn test_configuration_error() {
    let error = GeneratorError::configuration(
        "/nowhere/out",
        io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    );
    let error_msg = format!("{}", error);
    assert!(error_msg.contains("Configuration error"));
    assert!(error_msg.contains("/nowhere/out"));
    assert!(error_msg.contains("denied"));
    assert!(error.is_configuration());
    assert!(error.source().is_some());
}

#[test]
fn test_unbalanced_braces_error() {
    let error = GeneratorError::unbalanced_braces(7);
    let error_msg = format!("{}", error);
    assert!(error_msg.contains("Unbalanced braces"));
    assert!(error_msg.contains("line 7"));
    assert!(!error.is_configuration());
}

#[test]
fn test_io_error_conversion() {
    let io_error = io::Error::new(io::ErrorKind::Other, "disk full");
    let error: GeneratorError = io_error.into();
    assert!(matches!(error, GeneratorError::Io { .. }));
    assert!(format!("{}", error).contains("disk full"));
}

#[test]
fn test_model_error_from_bad_json() {
    let error = Model::from_json("{\"name\": 3}").unwrap_err();
    assert!(matches!(error, GeneratorError::Model { .. }));
    assert!(format!("{}", error).contains("Model error"));
}

#[test]
fn test_error_debug() {
    let error = GeneratorError::unbalanced_braces(1);
    let debug_str = format!("{:?}", error);
    assert!(debug_str.contains("UnbalancedBraces"));
}
