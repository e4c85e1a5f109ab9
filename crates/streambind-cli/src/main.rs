//! streambind CLI - Resolve API documents into function bindings
//!
//! Commands:
//! - `streambind resolve` - Print functions, binding config, and model classes as JSON
//! - `streambind check` - Resolve a document and summarize the result

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use streambind_core::{LogLevel, ResolveError};

mod commands;
mod load;

#[derive(Parser)]
#[command(name = "streambind")]
#[command(author, version, about = "Function-binding resolution for Spring Cloud Stream projects", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error, off); defaults to the
    /// parameters file's `logLevel`, then `warn`
    #[arg(long, global = true, value_parser = parse_level)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a document and print the result as JSON
    Resolve {
        #[command(flatten)]
        input: InputArgs,

        /// Write JSON to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Resolve a document and report what it produces
    Check {
        #[command(flatten)]
        input: InputArgs,
    },
}

/// Document and generation parameters shared by every command
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Path to the API document (.json, .yaml, or .yml)
    #[arg(short, long)]
    pub document: PathBuf,

    /// Path to a TOML file of generation parameters
    #[arg(short, long)]
    pub params: Option<PathBuf>,

    /// Override a generation parameter (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub overrides: Vec<String>,
}

fn parse_level(value: &str) -> Result<LogLevel, String> {
    LogLevel::parse(value).ok_or_else(|| format!("unknown log level '{value}'"))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    streambind_logging::init_logging(cli.log_level.unwrap_or(LogLevel::Warn));

    let result = match cli.command {
        Commands::Resolve { input, output } => {
            commands::resolve(&input, cli.log_level, output.as_deref())
        }
        Commands::Check { input } => commands::check(&input, cli.log_level),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(exit_code(&e))
        }
    }
}

/// Resolution failures exit with their error code, everything else with 1
fn exit_code(error: &anyhow::Error) -> u8 {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<ResolveError>())
        .map_or(1, ResolveError::error_code)
}
