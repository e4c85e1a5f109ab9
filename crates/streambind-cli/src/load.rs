//! Loading documents and generation parameters from disk

use anyhow::{Context, Result, bail};
use std::path::Path;
use streambind_core::{Document, GenerationParams};

/// Load an API document, choosing the parser by file extension
pub fn load_document(path: &Path) -> Result<Document> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read document: {}", path.display()))?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    let document = match extension.as_deref() {
        Some("json") => Document::from_json_str(&content),
        Some("yaml" | "yml") => Document::from_yaml_str(&content),
        _ => bail!(
            "Unsupported document extension: {} (expected .json, .yaml, or .yml)",
            path.display()
        ),
    };

    document.with_context(|| format!("Failed to parse document: {}", path.display()))
}

/// Load generation parameters from an optional TOML file plus `key=value` overrides
///
/// Overrides apply after the file, in the order given.
pub fn load_params(path: Option<&Path>, overrides: &[String]) -> Result<GenerationParams> {
    let mut params = match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read parameters: {}", path.display()))?;
            GenerationParams::from_toml_str(&content)
                .with_context(|| format!("Invalid parameters file: {}", path.display()))?
        }
        None => GenerationParams::default(),
    };

    for entry in overrides {
        let (key, value) = parse_override(entry)?;
        params
            .set(key, value)
            .with_context(|| format!("Invalid override: {entry}"))?;
    }

    Ok(params)
}

/// Split a `key=value` override
pub fn parse_override(entry: &str) -> Result<(&str, &str)> {
    match entry.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value.trim())),
        _ => bail!("Override must look like key=value: {entry}"),
    }
}

#[cfg(test)]
#[path = "load/load_tests.rs"]
mod load_tests;
