//! Derived schema-naming data shared across a generation run.
//!
//! [`ModelCache`] holds the model classes derived from `components.schemas`:
//! their Java class names, superclasses taken from `allOf` references, the
//! owners of anonymous nested object schemas, and whether any property name
//! needs an explicit JSON mapping. The data is built lazily on first use and
//! must be cleared with [`ModelCache::reset`] before the same cache serves a
//! different document.

use crate::document::{Document, Schema, SchemaType};
use crate::error::ResolveResult;
use crate::naming::{to_camel_case, to_pascal_case};
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashSet;

/// A Java model class derived from a schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelClass {
    /// Schema identity the class was derived from.
    pub schema_name: String,
    pub class_name: String,
    /// Class extended through the first `allOf` reference.
    pub super_class: Option<String>,
    /// Enclosing class of an anonymous nested schema.
    pub parent: Option<String>,
    /// Some property name differs from its Java field name.
    pub renamed_properties: bool,
}

/// Lazily built model-class table with an explicit reset.
#[derive(Debug, Default)]
pub struct ModelCache {
    classes: Option<IndexMap<String, ModelClass>>,
}

impl ModelCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all derived data. Calling this on an empty cache is a no-op.
    pub fn reset(&mut self) {
        if self.classes.take().is_some() {
            tracing::debug!("model cache cleared");
        }
    }

    /// Whether derived data is currently held.
    pub fn is_populated(&self) -> bool {
        self.classes.is_some()
    }

    /// All model classes of the document, in component order.
    pub fn model_classes(
        &mut self,
        document: &Document,
    ) -> ResolveResult<&IndexMap<String, ModelClass>> {
        if self.classes.is_none() {
            self.classes = Some(build_classes(document)?);
        }
        Ok(self.classes.get_or_insert_with(IndexMap::new))
    }

    /// Java class name for a schema identity.
    ///
    /// Identities without a model class are converted to PascalCase.
    pub fn class_name(&mut self, document: &Document, schema_id: &str) -> ResolveResult<String> {
        let classes = self.model_classes(document)?;
        Ok(classes
            .get(schema_id)
            .map(|class| class.class_name.clone())
            .unwrap_or_else(|| to_pascal_case(schema_id)))
    }
}

fn build_classes(document: &Document) -> ResolveResult<IndexMap<String, ModelClass>> {
    let mut classes = IndexMap::new();

    for (name, schema) in &document.components.schemas {
        let class_name = to_pascal_case(name);
        let super_class = schema
            .all_of
            .iter()
            .flatten()
            .find_map(Schema::ref_name)
            .map(to_pascal_case);
        let mut visited = HashSet::from([name.as_str()]);
        let renamed_properties = properties_diverge(document, schema, &mut visited)?;

        classes.insert(
            name.clone(),
            ModelClass {
                schema_name: name.clone(),
                class_name: class_name.clone(),
                super_class,
                parent: None,
                renamed_properties,
            },
        );
        collect_anonymous(document, schema, &class_name, &mut classes)?;
    }

    for payload in inline_payloads(document)? {
        let Some(id) = payload.schema_id.as_deref() else {
            continue;
        };
        if classes.contains_key(id) || payload.schema_type != Some(SchemaType::Object) {
            continue;
        }
        let class_name = to_pascal_case(id);
        let renamed_properties = properties_diverge(document, payload, &mut HashSet::new())?;
        classes.insert(
            id.to_string(),
            ModelClass {
                schema_name: id.to_string(),
                class_name: class_name.clone(),
                super_class: None,
                parent: None,
                renamed_properties,
            },
        );
        collect_anonymous(document, payload, &class_name, &mut classes)?;
    }

    tracing::debug!(count = classes.len(), "model classes derived");
    Ok(classes)
}

/// Message payloads declared inline rather than by `$ref`.
///
/// Component messages come first, then channel operations in declaration order.
fn inline_payloads(document: &Document) -> ResolveResult<Vec<&Schema>> {
    let mut payloads = Vec::new();
    let component_messages = document.components.messages.values();
    let operation_messages = document
        .channels
        .values()
        .flat_map(|channel| channel.publish.iter().chain(channel.subscribe.iter()))
        .flat_map(|operation| operation.messages());

    for message in component_messages.chain(operation_messages) {
        let message = document.resolve_message(message)?;
        if let Some(payload) = message.payload.as_ref().filter(|p| p.ref_path.is_none()) {
            payloads.push(payload);
        }
    }
    Ok(payloads)
}

/// Register inline object schemas carrying a parser id as inner classes.
fn collect_anonymous(
    document: &Document,
    schema: &Schema,
    owner: &str,
    classes: &mut IndexMap<String, ModelClass>,
) -> ResolveResult<()> {
    for (property, child) in schema.properties.iter().flatten() {
        let inline = match child.schema_type {
            Some(SchemaType::Array) => child.items.as_deref(),
            _ => Some(child),
        };
        let Some(inline) = inline.filter(|s| s.ref_path.is_none()) else {
            continue;
        };
        if inline.schema_type != Some(SchemaType::Object) {
            continue;
        }

        let class_name = to_pascal_case(property);
        if let Some(id) = inline.schema_id.as_deref() {
            if !classes.contains_key(id) {
                let renamed_properties =
                    properties_diverge(document, inline, &mut HashSet::new())?;
                classes.insert(
                    id.to_string(),
                    ModelClass {
                        schema_name: id.to_string(),
                        class_name: class_name.clone(),
                        super_class: None,
                        parent: Some(owner.to_string()),
                        renamed_properties,
                    },
                );
            }
        }
        collect_anonymous(document, inline, &class_name, classes)?;
    }
    Ok(())
}

/// Whether any property name in the schema tree differs from its camelCase form.
///
/// `$ref`s are followed; a schema identity already on `visited` counts as no
/// divergence, which ends the walk on self-referencing schemas.
pub fn properties_diverge<'a>(
    document: &'a Document,
    schema: &'a Schema,
    visited: &mut HashSet<&'a str>,
) -> ResolveResult<bool> {
    let resolved = document.resolve_schema(schema)?;
    if let Some(id) = resolved.id {
        if !visited.insert(id) {
            return Ok(false);
        }
    }
    let schema = resolved.schema;

    for (name, property) in schema.properties.iter().flatten() {
        if to_camel_case(name) != *name || properties_diverge(document, property, visited)? {
            return Ok(true);
        }
    }
    if let Some(items) = schema.items.as_deref() {
        if properties_diverge(document, items, visited)? {
            return Ok(true);
        }
    }
    for part in schema.all_of.iter().flatten() {
        if properties_diverge(document, part, visited)? {
            return Ok(true);
        }
    }

    Ok(false)
}
