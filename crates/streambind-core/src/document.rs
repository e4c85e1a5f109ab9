//! AsyncAPI-style document model.
//!
//! This module defines the subset of an AsyncAPI 2.x document the resolver
//! reads: channels with their publish/subscribe operations, messages, payload
//! schemas, channel parameters, and the reusable `components` section.
//!
//! Maps that carry declaration order (channels, parameters, properties,
//! components) are [`IndexMap`]s, since channel order decides the order of the
//! resolved functions.
//!
//! # References
//!
//! `$ref` values of the form `#/components/<section>/<name>` are resolved on
//! demand through [`Document::resolve_schema`], [`Document::resolve_message`]
//! and [`Document::resolve_parameter`]. A schema reached through a reference
//! takes the component name as its identity.

use crate::error::{ResolveError, ResolveResult};
use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;

const SCHEMA_PREFIX: &str = "#/components/schemas/";
const MESSAGE_PREFIX: &str = "#/components/messages/";
const PARAMETER_PREFIX: &str = "#/components/parameters/";

/// Root document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Document {
    /// Channels in declaration order.
    #[serde(default)]
    pub channels: IndexMap<String, Channel>,

    /// Reusable components.
    #[serde(default)]
    pub components: Components,
}

/// Reusable schemas, messages and parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Components {
    #[serde(default)]
    pub schemas: IndexMap<String, Schema>,

    #[serde(default)]
    pub messages: IndexMap<String, Message>,

    #[serde(default)]
    pub parameters: IndexMap<String, Parameter>,
}

/// A named communication path.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Channel {
    pub description: Option<String>,

    /// Placeholders appearing as `{name}` in the channel name.
    #[serde(default)]
    pub parameters: IndexMap<String, Parameter>,

    pub publish: Option<Operation>,

    pub subscribe: Option<Operation>,
}

impl Channel {
    /// Whether the channel declares parameters.
    pub fn has_parameters(&self) -> bool {
        !self.parameters.is_empty()
    }
}

/// A publish or subscribe operation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Operation {
    #[serde(rename = "operationId")]
    pub operation_id: Option<String>,

    pub message: Option<OperationMessage>,

    pub bindings: Option<OperationBindings>,

    /// Every other key, including `x-` extensions.
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl Operation {
    /// Candidate messages declared by the operation.
    pub fn messages(&self) -> &[Message] {
        match &self.message {
            None => &[],
            Some(OperationMessage::OneOf { one_of }) => one_of,
            Some(OperationMessage::Single(message)) => std::slice::from_ref(message),
        }
    }

    /// Solace binding of this operation, if declared.
    pub fn solace_binding(&self) -> Option<&SolaceBinding> {
        self.bindings.as_ref()?.solace.as_ref()
    }

    /// String value of an extension on this operation.
    pub fn ext(&self, name: &str) -> Option<&str> {
        self.extensions.get_str(name)
    }
}

/// Message declaration of an operation: a single message or a `oneOf` list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OperationMessage {
    OneOf {
        #[serde(rename = "oneOf")]
        one_of: Vec<Message>,
    },
    Single(Message),
}

/// A message carrying a payload schema.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Message {
    #[serde(rename = "$ref")]
    pub ref_path: Option<String>,

    pub name: Option<String>,

    pub payload: Option<Schema>,
}

/// Protocol bindings of an operation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OperationBindings {
    pub solace: Option<SolaceBinding>,
}

/// Queue binding for the Solace binder.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SolaceBinding {
    #[serde(rename = "queueName")]
    pub queue_name: Option<String>,

    #[serde(rename = "topicSubscriptions", default)]
    pub topic_subscriptions: Vec<String>,
}

impl SolaceBinding {
    /// Queue name plus at least one topic subscription.
    pub fn is_queue_with_subscription(&self) -> bool {
        self.queue_name.is_some() && !self.topic_subscriptions.is_empty()
    }
}

/// A channel parameter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Parameter {
    #[serde(rename = "$ref")]
    pub ref_path: Option<String>,

    pub description: Option<String>,

    pub schema: Option<Schema>,
}

/// Schema type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    Object,
    Array,
    String,
    Integer,
    Number,
    Boolean,
    Null,
}

impl SchemaType {
    /// The tag as written in the document.
    pub fn as_str(self) -> &'static str {
        match self {
            SchemaType::Object => "object",
            SchemaType::Array => "array",
            SchemaType::String => "string",
            SchemaType::Integer => "integer",
            SchemaType::Number => "number",
            SchemaType::Boolean => "boolean",
            SchemaType::Null => "null",
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JSON Schema subset used for payloads and parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Schema {
    #[serde(rename = "type")]
    pub schema_type: Option<SchemaType>,

    pub format: Option<String>,

    #[serde(rename = "enum")]
    pub enum_values: Option<Vec<serde_json::Value>>,

    pub properties: Option<IndexMap<String, Schema>>,

    pub items: Option<Box<Schema>>,

    #[serde(rename = "allOf")]
    pub all_of: Option<Vec<Schema>>,

    #[serde(rename = "$ref")]
    pub ref_path: Option<String>,

    /// Identity assigned by the document parser, if any.
    #[serde(rename = "x-parser-schema-id")]
    pub schema_id: Option<String>,
}

impl Schema {
    /// Enum values, when declared and non-empty.
    pub fn enum_values(&self) -> Option<&[serde_json::Value]> {
        self.enum_values.as_deref().filter(|values| !values.is_empty())
    }

    /// Component name this schema references, if it is a schema reference.
    pub fn ref_name(&self) -> Option<&str> {
        self.ref_path.as_deref()?.strip_prefix(SCHEMA_PREFIX)
    }
}

/// A schema after reference resolution, with its identity.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedSchema<'a> {
    pub schema: &'a Schema,
    /// Component name or parser-assigned id.
    pub id: Option<&'a str>,
}

/// Named values attached to a document object.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Extensions(IndexMap<String, serde_json::Value>);

impl Extensions {
    /// String value of the named extension.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.0.get(name)?.as_str()
    }
}

impl Document {
    /// Parse a document from JSON.
    pub fn from_json_str(content: &str) -> ResolveResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parse a document from YAML.
    pub fn from_yaml_str(content: &str) -> ResolveResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Follow `$ref`s until reaching a concrete schema.
    pub fn resolve_schema<'a>(&'a self, schema: &'a Schema) -> ResolveResult<ResolvedSchema<'a>> {
        let mut current = ResolvedSchema {
            schema,
            id: schema.schema_id.as_deref(),
        };
        let mut seen = HashSet::new();

        while let Some(path) = current.schema.ref_path.as_deref() {
            let name = path
                .strip_prefix(SCHEMA_PREFIX)
                .ok_or_else(|| ResolveError::UnresolvedReference(path.to_string()))?;
            if !seen.insert(name) {
                return Err(ResolveError::UnresolvedReference(format!(
                    "{path} (reference loop)"
                )));
            }
            let (key, target) = self
                .components
                .schemas
                .get_key_value(name)
                .ok_or_else(|| ResolveError::UnresolvedReference(path.to_string()))?;
            current = ResolvedSchema {
                schema: target,
                id: Some(target.schema_id.as_deref().unwrap_or(key)),
            };
        }

        Ok(current)
    }

    /// Follow a message `$ref`.
    pub fn resolve_message<'a>(&'a self, message: &'a Message) -> ResolveResult<&'a Message> {
        match message.ref_path.as_deref() {
            None => Ok(message),
            Some(path) => path
                .strip_prefix(MESSAGE_PREFIX)
                .and_then(|name| self.components.messages.get(name))
                .ok_or_else(|| ResolveError::UnresolvedReference(path.to_string())),
        }
    }

    /// Follow a parameter `$ref`.
    pub fn resolve_parameter<'a>(
        &'a self,
        parameter: &'a Parameter,
    ) -> ResolveResult<&'a Parameter> {
        match parameter.ref_path.as_deref() {
            None => Ok(parameter),
            Some(path) => path
                .strip_prefix(PARAMETER_PREFIX)
                .and_then(|name| self.components.parameters.get(name))
                .ok_or_else(|| ResolveError::UnresolvedReference(path.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "document/document_tests.rs"]
mod document_tests;
