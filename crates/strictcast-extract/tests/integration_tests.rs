//! Integration tests for extraction over decoded documents

use proptest::prelude::*;
use std::error::Error as _;
use strictcast_core::decode::mapping_from_json_str;
use strictcast_extract::{
    extract_array_required, extract_bool_optional, extract_float_required,
    extract_int_required, extract_optional, extract_required, extract_scalar_required,
    extract_string_optional, Array, ExtractError, Fields, Mapping, Scalar, TargetType, Value,
};

/// Helper to decode a JSON request body into a mapping
fn body(json: &str) -> Mapping {
    mapping_from_json_str(json).unwrap()
}

#[test]
fn test_end_to_end_examples() {
    assert_eq!(extract_int_required(&body(r#"{"num": "123"}"#), "num"), Ok(123));
    assert_eq!(extract_bool_optional(&body("{}"), "flag"), Ok(None));

    let err = extract_float_required(&body(r#"{"flt": true}"#), "flt").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid value at key 'flt' (expected float): Cannot cast boolean to float."
    );

    let err = extract_array_required(&body(r#"{"meta": "x"}"#), "meta").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid value at key 'meta' (expected array): Cannot cast string to array."
    );
}

#[test]
fn test_invalid_value_exposes_cast_failure_as_source() {
    let err = extract_int_required(&body(r#"{"count": 4.0}"#), "count").unwrap_err();

    let source = err.source().expect("cast failure should be chained");
    assert_eq!(source.to_string(), "Cannot cast floating-point to int.");
    assert_eq!(err.key(), "count");
}

#[test]
fn test_request_body_walkthrough() {
    let data = body(
        r#"{
            "user": "  alice  ",
            "age": "042",
            "admin": 0,
            "score": 9.5,
            "mode": "1",
            "tags": ["a", "b"],
            "profile": {"theme": "dark"}
        }"#,
    );
    let fields = Fields::new(&data);

    assert_eq!(fields.required::<String>("user"), Ok("  alice  ".to_string()));
    assert_eq!(fields.required::<i64>("age"), Ok(42));
    assert_eq!(fields.required::<bool>("admin"), Ok(false));
    assert_eq!(fields.required::<f64>("score"), Ok(9.5));
    assert_eq!(extract_scalar_required(&data, "mode"), Ok(Scalar::Bool(true)));
    assert_eq!(extract_int_required(&data, "mode"), Ok(1));

    let tags = extract_array_required(&data, "tags").unwrap();
    assert_eq!(tags.as_list().map(<[Value]>::len), Some(2));

    let profile = extract_array_required(&data, "profile").unwrap();
    let Array::Map(profile) = profile else {
        panic!("profile should decode as a mapping");
    };
    assert_eq!(
        extract_string_optional(&profile, "theme"),
        Ok(Some("dark".to_string()))
    );
}

#[test]
fn test_nested_mapping_keeps_document_order() {
    let data = body(r#"{"meta": {"zeta": 1, "alpha": 2, "mid": 3}}"#);

    let meta = extract_array_required(&data, "meta").unwrap();
    let keys: Vec<&str> = meta
        .as_map()
        .expect("meta should decode as a mapping")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, ["zeta", "alpha", "mid"]);
}

#[test]
fn test_integer_beyond_i64_is_rejected_not_rounded() {
    let data = body(r#"{"id": 18446744073709551615}"#);

    let err = extract_int_required(&data, "id").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid value at key 'id' (expected int): Cannot cast opaque to int."
    );

    let err = extract_float_required(&data, "id").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid value at key 'id' (expected float): Cannot cast opaque to float."
    );
    assert!(extract_scalar_required(&data, "id").is_err());
}

#[test]
fn test_every_target_reports_its_label() {
    let data = body(r#"{"v": null}"#);
    let expected = [
        (extract_optional::<bool>(&data, "v"), TargetType::Bool),
        (
            extract_optional::<i64>(&data, "v").map(|v| v.map(|_| true)),
            TargetType::Int,
        ),
        (
            extract_optional::<f64>(&data, "v").map(|v| v.map(|_| true)),
            TargetType::Float,
        ),
        (
            extract_optional::<String>(&data, "v").map(|v| v.map(|_| true)),
            TargetType::String,
        ),
        (
            extract_optional::<Scalar>(&data, "v").map(|v| v.map(|_| true)),
            TargetType::Scalar,
        ),
        (
            extract_optional::<Array>(&data, "v").map(|v| v.map(|_| true)),
            TargetType::Array,
        ),
    ];

    for (result, target) in expected {
        let err = result.unwrap_err();
        assert_eq!(
            err.to_string(),
            format!(
                "Invalid value at key 'v' (expected {}): Cannot cast null to {}.",
                target, target
            )
        );
    }
}

proptest! {
    /// Property: an absent key never fails in optional mode
    #[test]
    fn test_absent_optional_never_fails(key in "[a-z_]{1,12}") {
        let data = Mapping::new();
        prop_assert_eq!(extract_optional::<bool>(&data, &key), Ok(None));
        prop_assert_eq!(extract_optional::<i64>(&data, &key), Ok(None));
        prop_assert_eq!(extract_optional::<String>(&data, &key), Ok(None));
        prop_assert_eq!(extract_optional::<Array>(&data, &key), Ok(None));
    }

    /// Property: an absent key always fails in required mode with a stable message
    #[test]
    fn test_absent_required_always_fails(key in "[a-z_]{1,12}") {
        let data = Mapping::new();
        let err = extract_required::<f64>(&data, &key).unwrap_err();
        prop_assert_eq!(&err, &ExtractError::MissingKey { key: key.clone() });
        prop_assert_eq!(err.to_string(), format!("Missing required key '{}'.", key));
    }

    /// Property: digit strings extract as integers under any key
    #[test]
    fn test_digit_strings_extract(key in "[a-z]{1,8}", n: u32) {
        let mut data = Mapping::new();
        data.insert(key.clone(), Value::String(n.to_string()));
        prop_assert_eq!(extract_int_required(&data, &key), Ok(i64::from(n)));
    }
}
