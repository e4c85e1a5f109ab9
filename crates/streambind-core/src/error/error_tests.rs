#![allow(non_snake_case)]

use super::*;

#[test]
fn ResolveError___direction_conflict___names_function_and_channel() {
    let err = ResolveError::DirectionConflict {
        function: "orderSupplier".into(),
        channel: "orders/new".into(),
        side: Side::Publish,
    };

    let display = err.to_string();

    assert_eq!(
        display,
        "function 'orderSupplier' already has a publish channel; channel 'orders/new' cannot also publish through it"
    );
}

#[test]
fn ResolveError___unknown_parameter_type___displays_correctly() {
    let err = ResolveError::UnknownParameterType {
        channel: "a/{x}".into(),
        parameter: "x".into(),
    };

    let display = err.to_string();

    assert_eq!(
        display,
        "cannot determine the type of parameter 'x' on channel 'a/{x}'"
    );
}

#[test]
fn ResolveError___all_variants___have_unique_codes() {
    let errors = vec![
        ResolveError::UnsupportedBinder("".into()),
        ResolveError::DirectionConflict {
            function: "".into(),
            channel: "".into(),
            side: Side::Subscribe,
        },
        ResolveError::MissingPayload { channel: "".into() },
        ResolveError::MissingItemsType { name: "".into() },
        ResolveError::UnknownParameterType {
            channel: "".into(),
            parameter: "".into(),
        },
        ResolveError::TypeResolution {
            type_name: "".into(),
        },
        ResolveError::InvalidParameter {
            name: "".into(),
            value: "".into(),
        },
        ResolveError::UnresolvedReference("".into()),
        ResolveError::Document("".into()),
    ];

    let codes: Vec<u8> = errors.iter().map(|e| e.error_code()).collect();
    let unique: std::collections::HashSet<u8> = codes.iter().copied().collect();

    assert_eq!(
        codes.len(),
        unique.len(),
        "All error codes should be unique"
    );
}

#[test]
fn ResolveError___no_code_is_zero() {
    let err = ResolveError::UnsupportedBinder("mqtt".into());

    assert_ne!(err.error_code(), 0);
}

#[test]
fn ResolveError___from_serde_json_error___converts_to_document_error() {
    let json_err = serde_json::from_str::<String>("invalid").unwrap_err();

    let err: ResolveError = json_err.into();

    assert!(matches!(err, ResolveError::Document(_)));
}

#[test]
fn ResolveError___from_serde_yaml_error___converts_to_document_error() {
    let yaml_err = serde_yaml::from_str::<Vec<String>>("key: value").unwrap_err();

    let err: ResolveError = yaml_err.into();

    assert!(matches!(err, ResolveError::Document(_)));
}
