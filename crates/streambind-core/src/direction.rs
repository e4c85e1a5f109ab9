//! Publish/subscribe direction from the generated code's perspective.
//!
//! Documents describe operations from the client's side of the wire. When
//! generating a provider, the roles swap: the provider publishes to channels
//! the document marks `subscribe`.

use crate::config::GenerationParams;
use crate::document::{Channel, Operation};
use serde::Serialize;
use std::fmt;

/// Which side of a function a channel binds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Publish,
    Subscribe,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Publish => write!(f, "publish"),
            Side::Subscribe => write!(f, "subscribe"),
        }
    }
}

/// Whether generated code takes the provider's perspective.
pub fn is_provider_view(params: &GenerationParams) -> bool {
    params.is_provider_view()
}

/// The operation the generated code publishes through.
pub fn real_publisher<'a>(channel: &'a Channel, params: &GenerationParams) -> Option<&'a Operation> {
    if is_provider_view(params) {
        channel.subscribe.as_ref()
    } else {
        channel.publish.as_ref()
    }
}

/// The operation the generated code subscribes through.
pub fn real_subscriber<'a>(
    channel: &'a Channel,
    params: &GenerationParams,
) -> Option<&'a Operation> {
    if is_provider_view(params) {
        channel.publish.as_ref()
    } else {
        channel.subscribe.as_ref()
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use crate::config::View;

    fn channel() -> Channel {
        Channel {
            publish: Some(Operation {
                operation_id: Some("pub".into()),
                ..Operation::default()
            }),
            subscribe: Some(Operation {
                operation_id: Some("sub".into()),
                ..Operation::default()
            }),
            ..Channel::default()
        }
    }

    fn op_id(op: Option<&Operation>) -> Option<&str> {
        op.and_then(|o| o.operation_id.as_deref())
    }

    #[test]
    fn real_publisher___client_view___is_publish_operation() {
        let channel = channel();
        let params = GenerationParams::default();

        assert_eq!(op_id(real_publisher(&channel, &params)), Some("pub"));
        assert_eq!(op_id(real_subscriber(&channel, &params)), Some("sub"));
    }

    #[test]
    fn real_publisher___provider_view___is_subscribe_operation() {
        let channel = channel();
        let params = GenerationParams {
            view: View::Provider,
            ..GenerationParams::default()
        };

        assert_eq!(op_id(real_publisher(&channel, &params)), Some("sub"));
        assert_eq!(op_id(real_subscriber(&channel, &params)), Some("pub"));
    }

    #[test]
    fn real_subscriber___missing_operation___is_none() {
        let channel = Channel {
            publish: Some(Operation::default()),
            ..Channel::default()
        };
        let params = GenerationParams::default();

        assert!(real_subscriber(&channel, &params).is_none());
        assert!(real_publisher(&channel, &params).is_some());
    }

    #[test]
    fn is_provider_view___defaults_to_client() {
        assert!(!is_provider_view(&GenerationParams::default()));
    }

    #[test]
    fn Side___display___lowercase() {
        assert_eq!(Side::Publish.to_string(), "publish");
        assert_eq!(Side::Subscribe.to_string(), "subscribe");
    }
}
