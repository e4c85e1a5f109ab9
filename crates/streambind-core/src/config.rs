//! Generation parameter types

use crate::LogLevel;
use crate::error::{ResolveError, ResolveResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target messaging system of the generated bindings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Binder {
    #[default]
    Kafka,
    Rabbit,
    Solace,
}

impl FromStr for Binder {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kafka" => Ok(Binder::Kafka),
            "rabbit" => Ok(Binder::Rabbit),
            "solace" => Ok(Binder::Solace),
            other => Err(ResolveError::UnsupportedBinder(other.to_string())),
        }
    }
}

impl fmt::Display for Binder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Binder::Kafka => write!(f, "kafka"),
            Binder::Rabbit => write!(f, "rabbit"),
            Binder::Solace => write!(f, "solace"),
        }
    }
}

/// Perspective the generated code is written from
///
/// The document describes the API as seen by its clients, so a provider
/// publishes where the document says "subscribe" and vice versa.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Client,
    Provider,
}

/// How messages to parameterized topics are sent at runtime
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DynamicType {
    /// Publish through a runtime `StreamBridge`
    #[default]
    StreamBridge,
    /// Publish through a bound output with a target-destination header
    Header,
}

/// Parameters controlling a generation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationParams {
    /// Messaging system to bind to
    pub binder: Binder,

    /// Generate reactive (`Flux`) function signatures
    pub reactive: bool,

    /// Client or provider perspective
    pub view: View,

    /// Runtime strategy for dynamic topics
    pub dynamic_type: DynamicType,

    /// Map topic parameters of dynamic subscriptions to message headers
    pub parameters_to_headers: bool,

    /// Log level requested by the parameter source, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<LogLevel>,
}

impl GenerationParams {
    /// Create parameters with every option at its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Build parameters from string key/value pairs
    ///
    /// Keys the engine does not recognize are ignored, since the same parameter
    /// set also feeds the rendering and packaging stages.
    pub fn from_pairs<I, K, V>(pairs: I) -> ResolveResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            params.set(key.as_ref(), value.as_ref())?;
        }
        Ok(params)
    }

    /// Parse parameters from a TOML table of scalar values
    pub fn from_toml_str(content: &str) -> ResolveResult<Self> {
        let table: toml::Table = toml::from_str(content)?;
        let pairs = table.into_iter().map(|(key, value)| {
            let value = match value {
                toml::Value::String(s) => s,
                other => other.to_string(),
            };
            (key, value)
        });
        Self::from_pairs(pairs)
    }

    /// Apply a single named parameter
    pub fn set(&mut self, key: &str, value: &str) -> ResolveResult<()> {
        match key {
            "binder" => self.binder = value.parse()?,
            "reactive" => self.reactive = parse_flag(key, value)?,
            "view" => {
                self.view = match value {
                    "client" => View::Client,
                    "provider" => View::Provider,
                    _ => return Err(invalid(key, value)),
                }
            }
            "dynamicType" => {
                self.dynamic_type = match value {
                    "streamBridge" => DynamicType::StreamBridge,
                    "header" => DynamicType::Header,
                    _ => return Err(invalid(key, value)),
                }
            }
            "parametersToHeaders" => self.parameters_to_headers = parse_flag(key, value)?,
            "logLevel" => {
                self.log_level = Some(LogLevel::parse(value).ok_or_else(|| invalid(key, value))?)
            }
            _ => tracing::debug!(key, "ignoring parameter not used by the resolver"),
        }
        Ok(())
    }

    /// Whether generated code is written from the provider's perspective
    pub fn is_provider_view(&self) -> bool {
        self.view == View::Provider
    }
}

fn parse_flag(key: &str, value: &str) -> ResolveResult<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(invalid(key, value)),
    }
}

fn invalid(key: &str, value: &str) -> ResolveError {
    ResolveError::InvalidParameter {
        name: key.to_string(),
        value: value.to_string(),
    }
}
