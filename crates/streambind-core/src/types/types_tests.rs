#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test_case(SchemaType::String, None, "String", "%s")]
#[test_case(SchemaType::String, Some("date"), "java.time.LocalDate", "%s")]
#[test_case(SchemaType::String, Some("date-time"), "java.time.OffsetDateTime", "%s")]
#[test_case(SchemaType::String, Some("byte"), "byte[]", "%s")]
#[test_case(SchemaType::String, Some("binary"), "byte[]", "%s")]
#[test_case(SchemaType::Integer, None, "Integer", "%d")]
#[test_case(SchemaType::Integer, Some("int32"), "Integer", "%d")]
#[test_case(SchemaType::Integer, Some("int64"), "Long", "%d")]
#[test_case(SchemaType::Number, None, "java.math.BigDecimal", "%s")]
#[test_case(SchemaType::Number, Some("float"), "Float", "%f")]
#[test_case(SchemaType::Number, Some("double"), "Double", "%f")]
#[test_case(SchemaType::Boolean, None, "Boolean", "%s")]
#[test_case(SchemaType::Null, None, "String", "%s")]
fn resolve_type___known_pair___maps_to_java(
    primitive: SchemaType,
    format: Option<&str>,
    java_type: &str,
    print_format: &str,
) {
    let descriptor = resolve_type(primitive, format).unwrap();

    assert_eq!(descriptor.java_type, java_type);
    assert_eq!(descriptor.print_format, print_format);
}

#[test_case(SchemaType::String, "email")]
#[test_case(SchemaType::Integer, "uint8")]
#[test_case(SchemaType::Number, "decimal")]
#[test_case(SchemaType::Boolean, "int64")]
fn resolve_type___unknown_format___falls_back_to_default(primitive: SchemaType, format: &str) {
    let with_format = resolve_type(primitive, Some(format)).unwrap();
    let without_format = resolve_type(primitive, None).unwrap();

    assert_eq!(with_format, without_format);
}

#[test_case(SchemaType::Object)]
#[test_case(SchemaType::Array)]
fn resolve_type___non_primitive___is_type_resolution_error(schema_type: SchemaType) {
    let err = resolve_type(schema_type, None).unwrap_err();

    assert_eq!(
        err,
        ResolveError::TypeResolution {
            type_name: schema_type.as_str().into(),
        }
    );
}

#[test]
fn resolve_type___int64___sample_is_long_literal() {
    let descriptor = resolve_type(SchemaType::Integer, Some("int64")).unwrap();

    assert_eq!(descriptor.sample, "1L");
}

#[test]
fn resolve_type___same_input___returns_same_static_entry() {
    let first = resolve_type(SchemaType::Number, Some("float")).unwrap();
    let second = resolve_type(SchemaType::Number, Some("float")).unwrap();

    assert!(std::ptr::eq(first, second));
}

#[test]
fn is_primitive___only_scalar_types() {
    assert!(is_primitive(SchemaType::String));
    assert!(is_primitive(SchemaType::Null));
    assert!(!is_primitive(SchemaType::Object));
    assert!(!is_primitive(SchemaType::Array));
}
