#![allow(non_snake_case)]

use super::*;
use std::fs;
use streambind_core::{Binder, DynamicType, LogLevel, ResolveError};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

// Document loading

#[test]
fn load_document___yaml_extension___parses_yaml() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "api.yaml",
        "channels:\n  orders:\n    subscribe:\n      message:\n        payload:\n          type: string\n",
    );

    let doc = load_document(&path).unwrap();

    assert!(doc.channels.contains_key("orders"));
}

#[test]
fn load_document___uppercase_json_extension___parses_json() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "api.JSON", r#"{ "channels": { "a": {}, "b": {} } }"#);

    let doc = load_document(&path).unwrap();

    let names: Vec<&str> = doc.channels.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["a", "b"]);
}

#[test]
fn load_document___unknown_extension___fails() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "api.txt", "{}");

    let err = load_document(&path).unwrap_err();

    assert!(err.to_string().contains("Unsupported document extension"));
}

#[test]
fn load_document___missing_file___fails_with_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.yaml");

    let err = load_document(&path).unwrap_err();

    assert!(err.to_string().contains("absent.yaml"));
}

#[test]
fn load_document___malformed_json___keeps_resolve_error_in_chain() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "api.json", "{ not json");

    let err = load_document(&path).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ResolveError>(),
        Some(ResolveError::Document(_))
    ));
}

// Parameter loading

#[test]
fn load_params___no_file___uses_defaults() {
    let params = load_params(None, &[]).unwrap();

    assert_eq!(params, GenerationParams::default());
}

#[test]
fn load_params___toml_file___applies_values() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "params.toml",
        "binder = \"solace\"\nreactive = true\ndynamicType = \"header\"\nlogLevel = \"debug\"\n",
    );

    let params = load_params(Some(&path), &[]).unwrap();

    assert_eq!(params.binder, Binder::Solace);
    assert!(params.reactive);
    assert_eq!(params.dynamic_type, DynamicType::Header);
    assert_eq!(params.log_level, Some(LogLevel::Debug));
}

#[test]
fn load_params___overrides___apply_after_file() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "params.toml", "binder = \"solace\"\n");
    let overrides = vec!["binder=rabbit".to_string()];

    let params = load_params(Some(&path), &overrides).unwrap();

    assert_eq!(params.binder, Binder::Rabbit);
}

#[test]
fn load_params___unsupported_binder___keeps_resolve_error_in_chain() {
    let overrides = vec!["binder=pulsar".to_string()];

    let err = load_params(None, &overrides).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ResolveError>(),
        Some(ResolveError::UnsupportedBinder(_))
    ));
}

#[test]
fn parse_override___splits_on_first_equals() {
    assert_eq!(parse_override("a=b=c").unwrap(), ("a", "b=c"));
    assert_eq!(parse_override(" view = provider ").unwrap(), ("view", "provider"));
}

#[test]
fn parse_override___missing_equals_or_key___fails() {
    assert!(parse_override("reactive").is_err());
    assert!(parse_override("=true").is_err());
}
