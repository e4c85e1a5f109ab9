#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test]
fn LogLevel___ordering___trace_is_most_verbose() {
    assert!(LogLevel::Trace < LogLevel::Debug);
    assert!(LogLevel::Debug < LogLevel::Info);
    assert!(LogLevel::Info < LogLevel::Warn);
    assert!(LogLevel::Warn < LogLevel::Error);
    assert!(LogLevel::Error < LogLevel::Off);
}

#[test_case("trace", LogLevel::Trace ; "trace")]
#[test_case("debug", LogLevel::Debug ; "debug")]
#[test_case("INFO", LogLevel::Info ; "uppercase info")]
#[test_case("warning", LogLevel::Warn ; "warning alias")]
#[test_case(" error ", LogLevel::Error ; "padded error")]
#[test_case("off", LogLevel::Off ; "off")]
fn LogLevel___parse___accepts_known_names(input: &str, expected: LogLevel) {
    assert_eq!(LogLevel::parse(input), Some(expected));
}

#[test_case("verbose" ; "unknown word")]
#[test_case("" ; "empty")]
#[test_case("2" ; "numeric")]
fn LogLevel___parse___rejects_unknown_names(input: &str) {
    assert_eq!(LogLevel::parse(input), None);
}

#[test]
fn LogLevel___display___is_uppercase() {
    assert_eq!(LogLevel::Warn.to_string(), "WARN");
    assert_eq!(LogLevel::Off.to_string(), "OFF");
}

#[test]
fn LogLevel___serde___uses_lowercase_names() {
    let json = serde_json::to_string(&LogLevel::Debug).unwrap();
    let back: LogLevel = serde_json::from_str("\"error\"").unwrap();

    assert_eq!(json, "\"debug\"");
    assert_eq!(back, LogLevel::Error);
}

#[test]
fn prelude___exposes_resolution_entry_point() {
    use crate::prelude::*;

    let doc = Document::default();
    let resolution = resolve(&doc, &GenerationParams::default(), &mut ModelCache::new()).unwrap();

    assert!(resolution.functions.is_empty());
    assert_eq!(resolution.config.function_definition, "");
}
