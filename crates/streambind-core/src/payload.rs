//! Payload type resolution for operations.

use crate::cache::ModelCache;
use crate::document::{Document, Operation, Schema, SchemaType};
use crate::error::{ResolveError, ResolveResult};
use crate::types::resolve_type;
use std::collections::HashSet;

/// Payload type of a channel that may carry more than one message shape.
pub const ENVELOPE_TYPE: &str = "Message<?>";

/// Java type for untyped or anonymous object payloads.
const OBJECT_TYPE: &str = "Object";

/// Resolve the Java payload type of an operation.
///
/// Operations declaring several candidate messages resolve to
/// [`ENVELOPE_TYPE`]. An operation without a message or payload is an error.
pub fn resolve_payload_type(
    channel_name: &str,
    operation: &Operation,
    document: &Document,
    cache: &mut ModelCache,
) -> ResolveResult<String> {
    let messages = operation.messages();
    if messages.len() > 1 {
        return Ok(ENVELOPE_TYPE.to_string());
    }

    let missing = || ResolveError::MissingPayload {
        channel: channel_name.to_string(),
    };
    let message = document.resolve_message(messages.first().ok_or_else(missing)?)?;
    let payload = message.payload.as_ref().ok_or_else(missing)?;

    schema_type_name(payload, document, cache)
}

/// Java type name for a schema.
///
/// An array whose items lead back to the array itself is reported as a
/// reference loop.
pub fn schema_type_name(
    schema: &Schema,
    document: &Document,
    cache: &mut ModelCache,
) -> ResolveResult<String> {
    type_name(schema, document, cache, &mut HashSet::new())
}

fn type_name<'a>(
    schema: &'a Schema,
    document: &'a Document,
    cache: &mut ModelCache,
    arrays: &mut HashSet<&'a str>,
) -> ResolveResult<String> {
    let resolved = document.resolve_schema(schema)?;
    let schema = resolved.schema;

    match (schema.schema_type, resolved.id) {
        (Some(SchemaType::Array), id) => {
            if let Some(id) = id {
                if !arrays.insert(id) {
                    return Err(ResolveError::UnresolvedReference(format!(
                        "{id} (reference loop)"
                    )));
                }
            }
            let items = schema
                .items
                .as_deref()
                .ok_or_else(|| ResolveError::MissingItemsType {
                    name: id.unwrap_or("array").to_string(),
                })?;
            Ok(format!("List<{}>", type_name(items, document, cache, arrays)?))
        }
        (Some(SchemaType::Object) | None, Some(id)) => cache.class_name(document, id),
        (Some(SchemaType::Object) | None, None) => Ok(OBJECT_TYPE.to_string()),
        (Some(primitive), _) => {
            Ok(resolve_type(primitive, schema.format.as_deref())?.java_type.to_string())
        }
    }
}
