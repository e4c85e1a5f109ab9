//! Java type mappings for schema primitives.
//!
//! Lookup is two-level: first by primitive schema type, then by `format`
//! within that type. A missing or unrecognized format falls back to the
//! type's default entry.
//!
//! # Type Mappings
//!
//! | Schema | Format | Java | Print | Sample |
//! |--------|--------|------|-------|--------|
//! | `string` | - | `String` | `%s` | `"string"` |
//! | `string` | `date` | `java.time.LocalDate` | `%s` | `"2000-12-31"` |
//! | `string` | `date-time` | `java.time.OffsetDateTime` | `%s` | `"2000-12-31T23:59:59+01:00"` |
//! | `string` | `byte`, `binary` | `byte[]` | `%s` | base64 text |
//! | `integer` | -, `int32` | `Integer` | `%d` | `1` |
//! | `integer` | `int64` | `Long` | `%d` | `1L` |
//! | `number` | - | `java.math.BigDecimal` | `%s` | `100.1` |
//! | `number` | `float` | `Float` | `%f` | `1.1F` |
//! | `number` | `double` | `Double` | `%f` | `1.1` |
//! | `boolean` | - | `Boolean` | `%s` | `true` |
//! | `null` | - | `String` | `%s` | `null` |

use crate::document::SchemaType;
use crate::error::{ResolveError, ResolveResult};
use serde::Serialize;

/// A Java type with its format specifier and a sample literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDescriptor {
    /// Java type name (e.g., "Long", "java.time.LocalDate").
    pub java_type: &'static str,
    /// `String.format` specifier used to interpolate a value into a topic.
    pub print_format: &'static str,
    /// Java literal usable as an example argument.
    pub sample: &'static str,
}

impl TypeDescriptor {
    const fn new(java_type: &'static str, print_format: &'static str, sample: &'static str) -> Self {
        Self {
            java_type,
            print_format,
            sample,
        }
    }
}

/// Format-keyed entries for one primitive; `None` is the default entry.
type FormatTable = &'static [(Option<&'static str>, TypeDescriptor)];

static STRING_TYPES: FormatTable = &[
    (None, TypeDescriptor::new("String", "%s", "\"string\"")),
    (
        Some("date"),
        TypeDescriptor::new("java.time.LocalDate", "%s", "\"2000-12-31\""),
    ),
    (
        Some("date-time"),
        TypeDescriptor::new(
            "java.time.OffsetDateTime",
            "%s",
            "\"2000-12-31T23:59:59+01:00\"",
        ),
    ),
    (
        Some("byte"),
        TypeDescriptor::new("byte[]", "%s", "\"U3dhZ2dlciByb2Nrcw==\""),
    ),
    (
        Some("binary"),
        TypeDescriptor::new("byte[]", "%s", "\"base64-encoded file contents\""),
    ),
];

static INTEGER_TYPES: FormatTable = &[
    (None, TypeDescriptor::new("Integer", "%d", "1")),
    (Some("int32"), TypeDescriptor::new("Integer", "%d", "1")),
    (Some("int64"), TypeDescriptor::new("Long", "%d", "1L")),
];

static NUMBER_TYPES: FormatTable = &[
    (None, TypeDescriptor::new("java.math.BigDecimal", "%s", "100.1")),
    (Some("float"), TypeDescriptor::new("Float", "%f", "1.1F")),
    (Some("double"), TypeDescriptor::new("Double", "%f", "1.1")),
];

static BOOLEAN_TYPES: FormatTable = &[(None, TypeDescriptor::new("Boolean", "%s", "true"))];

static NULL_TYPES: FormatTable = &[(None, TypeDescriptor::new("String", "%s", "null"))];

fn format_table(primitive: SchemaType) -> Option<FormatTable> {
    match primitive {
        SchemaType::String => Some(STRING_TYPES),
        SchemaType::Integer => Some(INTEGER_TYPES),
        SchemaType::Number => Some(NUMBER_TYPES),
        SchemaType::Boolean => Some(BOOLEAN_TYPES),
        SchemaType::Null => Some(NULL_TYPES),
        SchemaType::Object | SchemaType::Array => None,
    }
}

/// Whether the schema type has an entry in the primitive tables.
pub fn is_primitive(schema_type: SchemaType) -> bool {
    format_table(schema_type).is_some()
}

/// Map a primitive schema type and optional format to a Java type.
///
/// Callers must only pass primitives; `object` and `array` yield
/// [`ResolveError::TypeResolution`].
pub fn resolve_type(
    primitive: SchemaType,
    format: Option<&str>,
) -> ResolveResult<&'static TypeDescriptor> {
    let table = format_table(primitive).ok_or_else(|| ResolveError::TypeResolution {
        type_name: primitive.to_string(),
    })?;

    let by_format = format.and_then(|f| table.iter().find(|(key, _)| *key == Some(f)));
    let entry = by_format
        .or_else(|| table.iter().find(|(key, _)| key.is_none()))
        .ok_or_else(|| ResolveError::TypeResolution {
            type_name: primitive.to_string(),
        })?;

    Ok(&entry.1)
}

#[cfg(test)]
#[path = "types/types_tests.rs"]
mod types_tests;
