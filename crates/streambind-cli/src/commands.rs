//! Subcommand implementations

use crate::InputArgs;
use crate::load::{load_document, load_params};
use anyhow::{Context, Result};
use std::path::Path;
use streambind_core::{
    FunctionRole, GenerationParams, LogLevel, ModelCache, Resolution, resolve as resolve_document,
};
use streambind_logging::{ReloadHandle, WarningLog};

/// Load inputs, apply the parameters' log level, and resolve
fn run(input: &InputArgs, cli_level: Option<LogLevel>) -> Result<Resolution> {
    let params = load_params(input.params.as_deref(), &input.overrides)?;
    apply_log_level(&params, cli_level);

    let document = load_document(&input.document)?;
    let mut cache = ModelCache::new();
    let resolution = resolve_document(&document, &params, &mut cache)
        .with_context(|| format!("Failed to resolve {}", input.document.display()))?;
    cache.reset();

    Ok(resolution)
}

/// A level given on the command line wins over the parameters file
fn apply_log_level(params: &GenerationParams, cli_level: Option<LogLevel>) {
    let Some(level) = params.log_level.filter(|_| cli_level.is_none()) else {
        return;
    };
    if let Err(e) = ReloadHandle::global().reload_level(level) {
        tracing::debug!(error = %e, "log level from parameters not applied");
    }
}

/// Resolve command implementation
pub fn resolve(input: &InputArgs, cli_level: Option<LogLevel>, output: Option<&Path>) -> Result<()> {
    let resolution = run(input, cli_level)?;
    let json =
        serde_json::to_string_pretty(&resolution).context("Failed to serialize resolution")?;

    match output {
        Some(path) => {
            std::fs::write(path, json + "\n")
                .with_context(|| format!("Failed to write output: {}", path.display()))?;
            tracing::info!(path = %path.display(), "resolution written");
        }
        None => println!("{json}"),
    }

    Ok(())
}

/// Check command implementation
pub fn check(input: &InputArgs, cli_level: Option<LogLevel>) -> Result<()> {
    println!("Checking document: {}", input.document.display());

    let resolution = run(input, cli_level)?;
    let count = |role: FunctionRole| {
        resolution
            .functions
            .values()
            .filter(|f| f.role == role)
            .count()
    };

    println!(
        "✓ Functions: {} ({} suppliers, {} consumers, {} functions)",
        resolution.functions.len(),
        count(FunctionRole::Supplier),
        count(FunctionRole::Consumer),
        count(FunctionRole::Function)
    );
    println!("✓ Bindings: {}", resolution.config.bindings.len());
    println!("✓ Model classes: {}", resolution.models.len());

    let mut warnings: Vec<String> = Vec::new();
    for event in WarningLog::global().take() {
        if !warnings.contains(&event.message) {
            warnings.push(event.message);
        }
    }
    if warnings.is_empty() {
        println!("\nDocument is valid!");
    } else {
        println!("\nDocument is valid with {} warning(s):", warnings.len());
        for warning in warnings {
            println!("  - {warning}");
        }
    }

    Ok(())
}
