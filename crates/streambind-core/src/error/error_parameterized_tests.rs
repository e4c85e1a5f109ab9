#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

// ============================================================================
// Parameterized error code mapping tests
// ============================================================================

#[test_case(ResolveError::UnsupportedBinder("mqtt".into()), 1, "UnsupportedBinder")]
#[test_case(
    ResolveError::DirectionConflict {
        function: "f".into(),
        channel: "c".into(),
        side: Side::Publish,
    },
    2,
    "DirectionConflict"
)]
#[test_case(ResolveError::MissingPayload { channel: "c".into() }, 3, "MissingPayload")]
#[test_case(ResolveError::MissingItemsType { name: "s".into() }, 4, "MissingItemsType")]
#[test_case(
    ResolveError::UnknownParameterType {
        channel: "c".into(),
        parameter: "p".into(),
    },
    5,
    "UnknownParameterType"
)]
#[test_case(ResolveError::TypeResolution { type_name: "object".into() }, 6, "TypeResolution")]
#[test_case(
    ResolveError::InvalidParameter {
        name: "view".into(),
        value: "x".into(),
    },
    7,
    "InvalidParameter"
)]
#[test_case(ResolveError::UnresolvedReference("#/x".into()), 8, "UnresolvedReference")]
#[test_case(ResolveError::Document("bad".into()), 9, "Document")]
fn ResolveError___variant___maps_to_correct_code(
    error: ResolveError,
    expected_code: u8,
    variant_name: &str,
) {
    assert_eq!(
        error.error_code(),
        expected_code,
        "{} should map to code {}",
        variant_name,
        expected_code
    );
}

// ============================================================================
// Parameterized display tests
// ============================================================================

#[test_case(
    ResolveError::UnsupportedBinder("mqtt".into()),
    "unsupported binder 'mqtt': expected one of kafka, rabbit, solace"
)]
#[test_case(
    ResolveError::MissingPayload { channel: "orders".into() },
    "channel 'orders' has an operation without a message payload"
)]
#[test_case(
    ResolveError::MissingItemsType { name: "tags".into() },
    "array schema 'tags' does not declare an items type"
)]
#[test_case(
    ResolveError::TypeResolution { type_name: "object".into() },
    "no type mapping for schema type 'object'"
)]
#[test_case(
    ResolveError::UnresolvedReference("#/components/schemas/Missing".into()),
    "unresolved reference: #/components/schemas/Missing"
)]
fn ResolveError___variant___displays_message(error: ResolveError, expected: &str) {
    assert_eq!(error.to_string(), expected);
}
