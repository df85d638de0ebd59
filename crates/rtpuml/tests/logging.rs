//! Tests for logging initialization
//!
//! Only one global subscriber can be installed per process, so every call
//! after the first is expected to fail gracefully rather than panic.

use rtpuml::core::logging::{init_default_logging, init_logging, LogFormat};
use rtpuml::model::{Capsule, Model, Package};
use rtpuml::plugins::Generator;
use rtpuml::{MemorySink, QualifiedNames};
use std::str::FromStr;

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str("compact").unwrap(), LogFormat::Compact);
    assert_eq!(LogFormat::from_str("Pretty").unwrap(), LogFormat::Pretty);
    assert_eq!(LogFormat::from_str("json").unwrap(), LogFormat::Json);
    assert!(LogFormat::from_str("yaml").is_err());
}

#[test]
fn test_init_logging_levels_and_formats() {
    for level in ["trace", "debug", "info", "warn", "error", "off"] {
        let _ = init_logging(Some(level), Some("compact"));
    }
    for format in LogFormat::variants() {
        let _ = init_logging(Some("info"), Some(format));
    }
    let _ = init_default_logging();
}

#[test]
fn test_init_logging_invalid_format() {
    let result = init_logging(Some("info"), Some("xml"));
    assert!(result.is_err());
}

#[test]
fn test_init_logging_invalid_level_falls_back() {
    let _ = init_logging(Some("not[a{filter"), Some("compact"));
}

#[test]
fn test_generation_with_trace_logging() {
    let _ = init_logging(Some("rtpuml=trace"), Some("compact"));

    let model = Model::new("Logged").with_root(Package::new("Logged").with_capsule(Capsule::new("Top")));
    let names = QualifiedNames::resolve(&model);
    let mut sink = MemorySink::new();
    assert!(Generator::new().generate(&model, &names, &mut sink).unwrap());
}
