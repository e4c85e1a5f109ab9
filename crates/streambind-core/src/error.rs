//! Error types for function-binding resolution

use crate::direction::Side;
use thiserror::Error;

/// Result type alias for resolution operations
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Error type for resolution operations
///
/// Every variant is fatal: a document that triggers one of these must halt
/// generation rather than produce partially resolved output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Configured binder is outside the supported set
    #[error("unsupported binder '{0}': expected one of kafka, rabbit, solace")]
    UnsupportedBinder(String),

    /// A derived function name already holds the side another channel claims
    #[error(
        "function '{function}' already has a {side} channel; channel '{channel}' cannot also {side} through it"
    )]
    DirectionConflict {
        function: String,
        channel: String,
        side: Side,
    },

    /// Operation has no resolvable payload
    #[error("channel '{channel}' has an operation without a message payload")]
    MissingPayload { channel: String },

    /// Array schema without an items schema
    #[error("array schema '{name}' does not declare an items type")]
    MissingItemsType { name: String },

    /// Channel parameter is neither a primitive nor an enum
    #[error("cannot determine the type of parameter '{parameter}' on channel '{channel}'")]
    UnknownParameterType { channel: String, parameter: String },

    /// Primitive type table lookup miss
    #[error("no type mapping for schema type '{type_name}'")]
    TypeResolution { type_name: String },

    /// Generation parameter carries an unrecognized value
    #[error("invalid value '{value}' for parameter '{name}'")]
    InvalidParameter { name: String, value: String },

    /// `$ref` does not point at a known component
    #[error("unresolved reference: {0}")]
    UnresolvedReference(String),

    /// Document or parameter file could not be deserialized
    #[error("document error: {0}")]
    Document(String),
}

impl ResolveError {
    /// Returns a stable numeric code, used as the CLI exit status
    pub fn error_code(&self) -> u8 {
        match self {
            ResolveError::UnsupportedBinder(_) => 1,
            ResolveError::DirectionConflict { .. } => 2,
            ResolveError::MissingPayload { .. } => 3,
            ResolveError::MissingItemsType { .. } => 4,
            ResolveError::UnknownParameterType { .. } => 5,
            ResolveError::TypeResolution { .. } => 6,
            ResolveError::InvalidParameter { .. } => 7,
            ResolveError::UnresolvedReference(_) => 8,
            ResolveError::Document(_) => 9,
        }
    }
}

impl From<serde_json::Error> for ResolveError {
    fn from(err: serde_json::Error) -> Self {
        ResolveError::Document(err.to_string())
    }
}

impl From<serde_yaml::Error> for ResolveError {
    fn from(err: serde_yaml::Error) -> Self {
        ResolveError::Document(err.to_string())
    }
}

impl From<toml::de::Error> for ResolveError {
    fn from(err: toml::de::Error) -> Self {
        ResolveError::Document(err.to_string())
    }
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;

#[cfg(test)]
#[path = "error/error_parameterized_tests.rs"]
mod error_parameterized_tests;
