//! Topic parameterization for dynamic channels.
//!
//! A channel such as `orders/{orderId}/status` cannot be bound to a static
//! destination. For these channels the resolver produces a `String.format`
//! pattern for publishing (`orders/%d/status`), a wildcard pattern for
//! subscribing (`orders/*/status`), and the typed parameter list that the
//! generated send method takes.

use crate::document::{Channel, Document};
use crate::error::{ResolveError, ResolveResult};
use crate::naming::{capitalize, to_camel_case};
use crate::types::{is_primitive, resolve_type};
use serde::Serialize;

/// Wildcard replacing a parameter in subscription patterns.
pub const TOPIC_WILDCARD: &str = "*";

const SEPARATOR: &str = ", ";

/// A typed channel parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterInfo {
    /// Java argument name (camelCase).
    pub name: String,

    /// Java type of the argument.
    pub java_type: String,

    /// Specifier substituted into the publish pattern.
    pub print_format: String,

    /// Example argument for sample invocations.
    pub sample_arg: String,

    /// Values of a generated enum type, when the parameter is an enum.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,

    /// Zero-based topic level holding the parameter, if it appears in the name.
    pub position: Option<usize>,
}

/// Everything derived from a channel name and its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelInfo {
    pub channel_name: String,
    pub parameters: Vec<ParameterInfo>,
    /// Channel name with each parameter replaced by its print specifier.
    pub publish_channel: String,
    /// Channel name with each parameter replaced by [`TOPIC_WILDCARD`].
    pub subscribe_channel: String,
    /// `Type name, Type name` for method declarations.
    pub function_param_list: String,
    /// `name, name` for forwarding calls.
    pub function_arg_list: String,
    /// Sample literals in parameter order.
    pub sample_arg_list: String,
    pub has_params: bool,
}

/// Derive [`ChannelInfo`] for a channel.
pub fn resolve_channel_info(
    channel_name: &str,
    channel: &Channel,
    document: &Document,
) -> ResolveResult<ChannelInfo> {
    let mut publish_channel = channel_name.to_string();
    let mut subscribe_channel = channel_name.to_string();
    let mut parameters = Vec::with_capacity(channel.parameters.len());
    let mut function_param_list = String::new();
    let mut function_arg_list = String::new();
    let mut sample_arg_list = String::new();

    for (raw_name, parameter) in &channel.parameters {
        let unknown = || ResolveError::UnknownParameterType {
            channel: channel_name.to_string(),
            parameter: raw_name.clone(),
        };

        let parameter = document.resolve_parameter(parameter)?;
        let schema = parameter.schema.as_ref().ok_or_else(unknown)?;
        let resolved = document.resolve_schema(schema)?;
        let schema = resolved.schema;
        let name = to_camel_case(raw_name);

        let info = match schema.schema_type {
            Some(primitive) if is_primitive(primitive) => {
                let descriptor = resolve_type(primitive, schema.format.as_deref())?;
                ParameterInfo {
                    name,
                    java_type: descriptor.java_type.to_string(),
                    print_format: descriptor.print_format.to_string(),
                    sample_arg: descriptor.sample.to_string(),
                    enum_values: None,
                    position: None,
                }
            }
            None => {
                let values: Vec<String> = schema
                    .enum_values()
                    .ok_or_else(unknown)?
                    .iter()
                    .map(enum_value_to_string)
                    .collect();
                let enum_type = capitalize(&name);
                ParameterInfo {
                    sample_arg: format!("{enum_type}.{}", values[0]),
                    java_type: enum_type,
                    print_format: "%s".to_string(),
                    enum_values: Some(values),
                    name,
                    position: None,
                }
            }
            Some(_) => return Err(unknown()),
        };

        let placeholder = format!("{{{raw_name}}}");
        let position = channel_name
            .split('/')
            .position(|level| level.contains(&placeholder));
        publish_channel = publish_channel.replace(&placeholder, &info.print_format);
        subscribe_channel = subscribe_channel.replace(&placeholder, TOPIC_WILDCARD);

        if !parameters.is_empty() {
            function_param_list.push_str(SEPARATOR);
            function_arg_list.push_str(SEPARATOR);
            sample_arg_list.push_str(SEPARATOR);
        }
        function_param_list.push_str(&format!("{} {}", info.java_type, info.name));
        function_arg_list.push_str(&info.name);
        sample_arg_list.push_str(&info.sample_arg);

        parameters.push(ParameterInfo { position, ..info });
    }

    Ok(ChannelInfo {
        channel_name: channel_name.to_string(),
        has_params: channel.has_parameters(),
        parameters,
        publish_channel,
        subscribe_channel,
        function_param_list,
        function_arg_list,
        sample_arg_list,
    })
}

fn enum_value_to_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
