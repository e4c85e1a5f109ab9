//! streambind-core - Function-binding resolution for message-driven APIs
//!
//! This crate turns a parsed API document into the data a Spring Cloud Stream
//! project generator renders:
//! - [`FunctionSpec`] for every supplier, consumer, and function bean
//! - [`StreamConfig`] for binding destinations, groups, and queue settings
//! - [`ModelClass`] for every generated payload class
//!
//! [`resolve`] runs the whole pipeline for one [`Document`].

pub mod binding;
pub mod cache;
pub mod channel;
pub mod config;
pub mod direction;
pub mod document;
pub mod error;
pub mod function;
pub mod naming;
pub mod payload;
mod resolve;
pub mod types;

pub use binding::{BindingTarget, QueueBinding, StreamConfig};
pub use cache::{ModelCache, ModelClass};
pub use channel::{ChannelInfo, ParameterInfo};
pub use config::{Binder, DynamicType, GenerationParams, View};
pub use document::Document;
pub use error::{ResolveError, ResolveResult};
pub use function::{FunctionRole, FunctionSpec, build_function_specs};
pub use resolve::{Resolution, resolve};

use serde::{Deserialize, Serialize};

/// Log verbosity accepted by the `logLevel` parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    /// Parse a level name, ignoring ASCII case
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            "off" => Some(LogLevel::Off),
            _ => None,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Binder, Document, FunctionRole, FunctionSpec, GenerationParams, LogLevel, ModelCache,
        Resolution, ResolveError, ResolveResult, StreamConfig, resolve,
    };
}

#[cfg(test)]
mod lib_tests;
