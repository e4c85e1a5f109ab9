#![allow(non_snake_case)]

use super::*;

const YAML: &str = r##"
asyncapi: 2.6.0
info:
  title: Orders
  version: 1.0.0
channels:
  orders/{orderId}/status:
    parameters:
      orderId:
        schema:
          type: integer
          format: int64
    subscribe:
      x-scs-function-name: statusChanged
      message:
        $ref: '#/components/messages/StatusMessage'
  orders/new:
    publish:
      bindings:
        solace:
          queueName: NEW_ORDERS
          topicSubscriptions:
            - orders/new
            - orders/retry
      message:
        oneOf:
          - payload:
              type: string
          - payload:
              type: integer
components:
  messages:
    StatusMessage:
      payload:
        $ref: '#/components/schemas/OrderStatus'
  schemas:
    OrderStatus:
      type: object
      properties:
        state:
          type: string
"##;

#[test]
fn Document___from_yaml_str___preserves_channel_order() {
    let doc = Document::from_yaml_str(YAML).unwrap();

    let names: Vec<&str> = doc.channels.keys().map(String::as_str).collect();

    assert_eq!(names, vec!["orders/{orderId}/status", "orders/new"]);
}

#[test]
fn Document___from_yaml_str___reads_extensions_and_bindings() {
    let doc = Document::from_yaml_str(YAML).unwrap();

    let status = &doc.channels["orders/{orderId}/status"];
    let subscribe = status.subscribe.as_ref().unwrap();
    assert_eq!(subscribe.ext("x-scs-function-name"), Some("statusChanged"));
    assert!(status.has_parameters());

    let publish = doc.channels["orders/new"].publish.as_ref().unwrap();
    let binding = publish.solace_binding().unwrap();
    assert_eq!(binding.queue_name.as_deref(), Some("NEW_ORDERS"));
    assert_eq!(binding.topic_subscriptions, vec!["orders/new", "orders/retry"]);
    assert!(binding.is_queue_with_subscription());
}

#[test]
fn Document___from_yaml_str___reads_one_of_messages() {
    let doc = Document::from_yaml_str(YAML).unwrap();

    let publish = doc.channels["orders/new"].publish.as_ref().unwrap();

    assert_eq!(publish.messages().len(), 2);
}

#[test]
fn Document___resolve_message___follows_component_ref() {
    let doc = Document::from_yaml_str(YAML).unwrap();
    let subscribe = doc.channels["orders/{orderId}/status"]
        .subscribe
        .as_ref()
        .unwrap();

    let message = doc.resolve_message(&subscribe.messages()[0]).unwrap();

    assert!(message.payload.is_some());
}

#[test]
fn Document___resolve_schema___uses_component_name_as_identity() {
    let doc = Document::from_yaml_str(YAML).unwrap();
    let payload = doc.components.messages["StatusMessage"]
        .payload
        .as_ref()
        .unwrap();

    let resolved = doc.resolve_schema(payload).unwrap();

    assert_eq!(resolved.id, Some("OrderStatus"));
    assert_eq!(resolved.schema.schema_type, Some(SchemaType::Object));
}

#[test]
fn Document___resolve_schema___missing_component_is_error() {
    let doc = Document::default();
    let schema = Schema {
        ref_path: Some("#/components/schemas/Nope".into()),
        ..Schema::default()
    };

    let err = doc.resolve_schema(&schema).unwrap_err();

    assert_eq!(
        err,
        ResolveError::UnresolvedReference("#/components/schemas/Nope".into())
    );
}

#[test]
fn Document___resolve_schema___reference_loop_is_error() {
    let json = r##"{
        "components": {
            "schemas": {
                "A": { "$ref": "#/components/schemas/B" },
                "B": { "$ref": "#/components/schemas/A" }
            }
        }
    }"##;
    let doc = Document::from_json_str(json).unwrap();
    let schema = Schema {
        ref_path: Some("#/components/schemas/A".into()),
        ..Schema::default()
    };

    let result = doc.resolve_schema(&schema);

    assert!(matches!(result, Err(ResolveError::UnresolvedReference(_))));
}

#[test]
fn Document___resolve_parameter___follows_component_ref() {
    let json = r##"{
        "components": {
            "parameters": {
                "region": { "schema": { "enum": ["us", "eu"] } }
            }
        }
    }"##;
    let doc = Document::from_json_str(json).unwrap();
    let param = Parameter {
        ref_path: Some("#/components/parameters/region".into()),
        ..Parameter::default()
    };

    let resolved = doc.resolve_parameter(&param).unwrap();

    assert_eq!(resolved.schema.as_ref().unwrap().enum_values().unwrap().len(), 2);
}

#[test]
fn Document___from_json_str___rejects_unknown_schema_type() {
    let json = r#"{ "components": { "schemas": { "A": { "type": "date" } } } }"#;

    let result = Document::from_json_str(json);

    assert!(matches!(result, Err(ResolveError::Document(_))));
}

#[test]
fn Schema___enum_values___empty_list_is_none() {
    let schema = Schema {
        enum_values: Some(vec![]),
        ..Schema::default()
    };

    assert!(schema.enum_values().is_none());
}
