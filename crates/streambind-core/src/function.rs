//! Function specifications and the channel merge algorithm.
//!
//! Each channel contributes up to two sides, a publisher and a subscriber,
//! resolved from the configured [`View`](crate::config::View). Every side is
//! assigned a function name; sides that land on the same name merge into one
//! [`FunctionSpec`]:
//!
//! ```text
//! publish only            -> Supplier
//! subscribe only          -> Consumer
//! publish + subscribe     -> Function
//! ```
//!
//! A name may hold at most one publish side and one subscribe side. The only
//! exception is a Solace queue with topic subscriptions: further subscribe
//! sides naming the same queue add their topics to the queue's subscription
//! list instead of claiming a new subscribe side.

use crate::cache::ModelCache;
use crate::channel::{ChannelInfo, resolve_channel_info};
use crate::config::{Binder, GenerationParams};
use crate::direction::{Side, real_publisher, real_subscriber};
use crate::document::{Channel, Document, Operation, SolaceBinding};
use crate::error::{ResolveError, ResolveResult};
use crate::naming::to_camel_case;
use crate::payload::{ENVELOPE_TYPE, resolve_payload_type};
use indexmap::IndexMap;
use serde::Serialize;

/// Operation extension overriding the derived function name.
pub const FUNCTION_NAME_EXT: &str = "x-scs-function-name";
/// Operation extension overriding the subscribe destination.
pub const DESTINATION_EXT: &str = "x-scs-destination";
/// Operation extension naming the consumer group.
pub const GROUP_EXT: &str = "x-scs-group";

/// Kind of functional bean a spec becomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FunctionRole {
    Supplier,
    Consumer,
    Function,
}

/// A resolved integration function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionSpec {
    pub name: String,
    pub role: FunctionRole,

    pub publish_payload: Option<String>,
    /// Raw channel name of the publish side.
    pub publish_channel: Option<String>,
    pub publish_channel_info: Option<ChannelInfo>,

    pub subscribe_payload: Option<String>,
    /// Destination the subscribe side binds to.
    pub subscribe_channel: Option<String>,
    pub subscribe_channel_info: Option<ChannelInfo>,

    pub group: Option<String>,

    pub is_queue_with_subscription: bool,
    pub queue_name: Option<String>,
    pub additional_subscriptions: Vec<String>,
    pub multiple_messages: bool,

    /// Either side's channel carries parameters.
    pub dynamic: bool,
    /// Subscribe-side topic parameters are copied to message headers.
    pub parameters_to_headers: bool,
}

impl FunctionSpec {
    fn new(name: String, role: FunctionRole) -> Self {
        Self {
            name,
            role,
            publish_payload: None,
            publish_channel: None,
            publish_channel_info: None,
            subscribe_payload: None,
            subscribe_channel: None,
            subscribe_channel_info: None,
            group: None,
            is_queue_with_subscription: false,
            queue_name: None,
            additional_subscriptions: Vec::new(),
            multiple_messages: false,
            dynamic: false,
            parameters_to_headers: false,
        }
    }

    pub fn has_publish_side(&self) -> bool {
        self.publish_channel.is_some()
    }

    pub fn has_subscribe_side(&self) -> bool {
        self.subscribe_channel.is_some()
    }

    /// Whether the publish destination must be built at runtime.
    pub fn is_publish_dynamic(&self) -> bool {
        self.publish_channel_info
            .as_ref()
            .is_some_and(|info| info.has_params)
    }

    /// Input binding name (`<name>-in-0`).
    pub fn input_binding(&self) -> String {
        format!("{}-in-0", self.name)
    }

    /// Output binding name (`<name>-out-0`).
    pub fn output_binding(&self) -> String {
        format!("{}-out-0", self.name)
    }

    /// Java functional interface type of the generated bean.
    pub fn functional_type(&self, reactive: bool) -> String {
        let wrap = |ty: &str| {
            if reactive {
                format!("Flux<{ty}>")
            } else {
                ty.to_string()
            }
        };
        let publish = wrap(self.publish_payload.as_deref().unwrap_or(ENVELOPE_TYPE));
        let subscribe = wrap(self.subscribe_payload.as_deref().unwrap_or(ENVELOPE_TYPE));

        match self.role {
            FunctionRole::Supplier => format!("Supplier<{publish}>"),
            FunctionRole::Consumer => format!("Consumer<{subscribe}>"),
            FunctionRole::Function => format!("Function<{subscribe}, {publish}>"),
        }
    }
}

/// Builds the ordered function map from a document's channels.
pub struct FunctionSpecBuilder<'a> {
    document: &'a Document,
    params: &'a GenerationParams,
    cache: &'a mut ModelCache,
    specs: IndexMap<String, FunctionSpec>,
}

impl<'a> FunctionSpecBuilder<'a> {
    pub fn new(
        document: &'a Document,
        params: &'a GenerationParams,
        cache: &'a mut ModelCache,
    ) -> Self {
        Self {
            document,
            params,
            cache,
            specs: IndexMap::new(),
        }
    }

    /// Resolve both sides of one channel and merge them into the map.
    pub fn add_channel(&mut self, channel_name: &str, channel: &'a Channel) -> ResolveResult<()> {
        let publisher = real_publisher(channel, self.params);
        let subscriber = real_subscriber(channel, self.params);
        if publisher.is_none() && subscriber.is_none() {
            tracing::debug!(channel = channel_name, "channel has no operations");
            return Ok(());
        }

        let info = resolve_channel_info(channel_name, channel, self.document)?;

        if let Some(operation) = publisher {
            self.add_publisher(channel_name, operation, &info)?;
        }
        if let Some(operation) = subscriber {
            self.add_subscriber(channel_name, operation, &info)?;
        }
        Ok(())
    }

    /// The resolved functions in first-seen order.
    pub fn finish(self) -> IndexMap<String, FunctionSpec> {
        self.specs
    }

    fn add_publisher(
        &mut self,
        channel_name: &str,
        operation: &'a Operation,
        info: &ChannelInfo,
    ) -> ResolveResult<()> {
        let binding = self.queue_binding(operation);
        let name = function_name(channel_name, operation, binding, Side::Publish);
        if self.specs.get(&name).is_some_and(FunctionSpec::has_publish_side) {
            return Err(conflict(name, channel_name, Side::Publish));
        }

        let payload = resolve_payload_type(channel_name, operation, self.document, self.cache)?;

        let spec = self
            .specs
            .entry(name.clone())
            .or_insert_with(|| FunctionSpec::new(name, FunctionRole::Supplier));
        if spec.has_subscribe_side() {
            spec.role = FunctionRole::Function;
        }
        spec.publish_payload = Some(payload);
        spec.publish_channel = Some(channel_name.to_string());
        spec.publish_channel_info = Some(info.clone());
        spec.dynamic |= info.has_params;

        tracing::debug!(
            channel = channel_name,
            function = %spec.name,
            role = ?spec.role,
            "resolved publish side"
        );
        Ok(())
    }

    fn add_subscriber(
        &mut self,
        channel_name: &str,
        operation: &'a Operation,
        info: &ChannelInfo,
    ) -> ResolveResult<()> {
        let binding = self.queue_binding(operation);
        let name = function_name(channel_name, operation, binding, Side::Subscribe);

        if let Some(existing) = self.specs.get_mut(&name) {
            if existing.is_queue_with_subscription {
                let topics = binding.map(|b| b.topic_subscriptions.as_slice());
                merge_subscriptions(existing, topics.unwrap_or_default());
                if existing.additional_subscriptions.len() > 1 {
                    existing.multiple_messages = true;
                }
                existing.subscribe_payload = Some(ENVELOPE_TYPE.to_string());
                tracing::debug!(
                    channel = channel_name,
                    function = %name,
                    subscriptions = existing.additional_subscriptions.len(),
                    "merged queue subscriptions"
                );
                return Ok(());
            }
            if existing.has_subscribe_side() {
                return Err(conflict(name, channel_name, Side::Subscribe));
            }
        }

        let is_new = !self.specs.contains_key(&name);
        let mut queue = None;
        if is_new {
            if let Some(binding) = binding.filter(|b| b.is_queue_with_subscription()) {
                queue = Some(binding);
            }
        }
        let multiple_messages = queue.is_some_and(|b| dedup(&b.topic_subscriptions).len() > 1);

        let payload = if multiple_messages {
            ENVELOPE_TYPE.to_string()
        } else {
            resolve_payload_type(channel_name, operation, self.document, self.cache)?
        };

        let spec = self
            .specs
            .entry(name.clone())
            .or_insert_with(|| FunctionSpec::new(name, FunctionRole::Consumer));
        if spec.has_publish_side() {
            spec.role = FunctionRole::Function;
        }
        if let Some(binding) = queue {
            spec.is_queue_with_subscription = true;
            spec.queue_name = binding.queue_name.clone();
            spec.additional_subscriptions = dedup(&binding.topic_subscriptions);
            spec.multiple_messages = multiple_messages;
        }

        spec.subscribe_payload = Some(payload);
        spec.group = operation.ext(GROUP_EXT).map(str::to_string);
        let destination = match operation.ext(DESTINATION_EXT) {
            Some(destination) => destination.to_string(),
            None if spec.is_queue_with_subscription => spec
                .additional_subscriptions
                .first()
                .cloned()
                .unwrap_or_else(|| info.subscribe_channel.clone()),
            None => info.subscribe_channel.clone(),
        };
        spec.subscribe_channel = Some(destination);
        spec.subscribe_channel_info = Some(info.clone());
        spec.dynamic |= info.has_params;
        spec.parameters_to_headers = self.params.parameters_to_headers && info.has_params;

        tracing::debug!(
            channel = channel_name,
            function = %spec.name,
            role = ?spec.role,
            "resolved subscribe side"
        );
        Ok(())
    }

    /// The operation's Solace binding, when binding to Solace.
    fn queue_binding<'o>(&self, operation: &'o Operation) -> Option<&'o SolaceBinding> {
        let binding = operation.solace_binding()?;
        if self.params.binder != Binder::Solace {
            tracing::warn!(
                binder = %self.params.binder,
                "ignoring solace binding for a non-solace binder"
            );
            return None;
        }
        Some(binding)
    }
}

/// Resolve every channel of a document into an ordered function map.
///
/// The cache is reset first, so derived data from an earlier document never
/// leaks into this run.
pub fn build_function_specs(
    document: &Document,
    params: &GenerationParams,
    cache: &mut ModelCache,
) -> ResolveResult<IndexMap<String, FunctionSpec>> {
    cache.reset();

    let mut builder = FunctionSpecBuilder::new(document, params, cache);
    for (name, channel) in &document.channels {
        builder.add_channel(name, channel)?;
    }
    let specs = builder.finish();

    tracing::info!(
        channels = document.channels.len(),
        functions = specs.len(),
        "function specs resolved"
    );
    Ok(specs)
}

/// Derive the function name of one side of a channel.
fn function_name(
    channel_name: &str,
    operation: &Operation,
    binding: Option<&SolaceBinding>,
    side: Side,
) -> String {
    if let Some(name) = operation.ext(FUNCTION_NAME_EXT) {
        return name.to_string();
    }
    if let Some(queue_name) = binding.and_then(|b| b.queue_name.as_deref()) {
        return to_camel_case(queue_name);
    }
    let suffix = match side {
        Side::Publish => "Supplier",
        Side::Subscribe => "Consumer",
    };
    format!("{}{suffix}", to_camel_case(channel_name))
}

fn conflict(function: String, channel: &str, side: Side) -> ResolveError {
    ResolveError::DirectionConflict {
        function,
        channel: channel.to_string(),
        side,
    }
}

fn merge_subscriptions(spec: &mut FunctionSpec, topics: &[String]) {
    for topic in topics {
        if !spec.additional_subscriptions.contains(topic) {
            spec.additional_subscriptions.push(topic.clone());
        }
    }
}

fn dedup(topics: &[String]) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(topics.len());
    for topic in topics {
        if !unique.contains(topic) {
            unique.push(topic.clone());
        }
    }
    unique
}
