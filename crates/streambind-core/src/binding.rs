//! Binding configuration derived from resolved functions
//!
//! This is the data behind the generated application configuration:
//! - `spring.cloud.function.definition`, a semicolon-joined function list
//! - `spring.cloud.stream.bindings`, binding name to destination and group
//! - `spring.cloud.stream.solace.bindings`, queue subscriptions beyond the
//!   primary destination

use crate::config::{Binder, DynamicType, GenerationParams};
use crate::function::{FunctionRole, FunctionSpec};
use indexmap::IndexMap;
use serde::Serialize;

/// Destination and consumer group of one binding
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BindingTarget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

/// Solace consumer settings for a queue-bound input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueBinding {
    /// SpEL literal naming the queue
    pub queue_name_expression: String,

    /// Topics added to the queue besides the binding destination
    pub queue_additional_subscriptions: Vec<String>,
}

/// Configuration values for the rendered application settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamConfig {
    pub function_definition: String,
    pub bindings: IndexMap<String, BindingTarget>,
    pub queue_bindings: IndexMap<String, QueueBinding>,
    /// Java functional type per function name
    pub signatures: IndexMap<String, String>,
}

impl StreamConfig {
    /// Derive configuration from functions, preserving their order
    pub fn from_specs(specs: &IndexMap<String, FunctionSpec>, params: &GenerationParams) -> Self {
        let mut config = Self::default();
        let mut definitions = Vec::with_capacity(specs.len());

        for spec in specs.values() {
            let bridged = spec.is_publish_dynamic() && params.dynamic_type == DynamicType::StreamBridge;

            if !(bridged && spec.role == FunctionRole::Supplier) {
                definitions.push(spec.name.as_str());
            }

            if spec.has_subscribe_side() {
                config.bindings.insert(
                    spec.input_binding(),
                    BindingTarget {
                        destination: spec.subscribe_channel.clone(),
                        group: spec.group.clone(),
                    },
                );
            }

            if spec.has_publish_side() && !bridged {
                let destination = if spec.is_publish_dynamic() {
                    None
                } else {
                    spec.publish_channel.clone()
                };
                config.bindings.insert(
                    spec.output_binding(),
                    BindingTarget {
                        destination,
                        group: None,
                    },
                );
            }

            if params.binder == Binder::Solace && spec.is_queue_with_subscription {
                if let Some(queue_binding) = queue_binding(spec) {
                    config.queue_bindings.insert(spec.input_binding(), queue_binding);
                }
            }

            config
                .signatures
                .insert(spec.name.clone(), spec.functional_type(params.reactive));
        }

        config.function_definition = definitions.join(";");
        config
    }
}

fn queue_binding(spec: &FunctionSpec) -> Option<QueueBinding> {
    let queue_name = spec.queue_name.as_deref()?;
    let primary = spec.subscribe_channel.as_deref();

    Some(QueueBinding {
        queue_name_expression: format!("'{queue_name}'"),
        queue_additional_subscriptions: spec
            .additional_subscriptions
            .iter()
            .filter(|topic| Some(topic.as_str()) != primary)
            .cloned()
            .collect(),
    })
}
