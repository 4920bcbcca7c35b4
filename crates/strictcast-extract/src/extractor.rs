//! Keyed lookup plus strict cast

use crate::ExtractError;
use strictcast_core::{Array, Cast, Mapping, Scalar};
use tracing::{debug, trace};

/// How an absent key is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Presence {
    /// Absent key yields `Ok(None)`
    #[default]
    Optional,

    /// Absent key is an error
    Required,
}

/// Look up `key` in `data` and cast its value to `T`
///
/// # Returns
///
/// - `Ok(Some(value))` when the key is present and casts cleanly
/// - `Ok(None)` when the key is absent and `presence` is [`Presence::Optional`]
/// - [`ExtractError::MissingKey`] when the key is absent and required
/// - [`ExtractError::InvalidValue`] when the value fails to cast, in either mode
pub fn extract<T: Cast>(
    data: &Mapping,
    key: &str,
    presence: Presence,
) -> Result<Option<T>, ExtractError> {
    trace!(key, expected = %T::TARGET, ?presence, "Extracting value");

    let Some(value) = data.get(key) else {
        return match presence {
            Presence::Optional => Ok(None),
            Presence::Required => {
                debug!(key, "Required key missing");
                Err(ExtractError::MissingKey {
                    key: key.to_string(),
                })
            }
        };
    };

    T::cast(value).map(Some).map_err(|cause| {
        debug!(
            key,
            expected = %T::TARGET,
            observed = %cause.observed,
            "Value failed to cast"
        );
        ExtractError::InvalidValue {
            key: key.to_string(),
            expected: T::TARGET,
            cause,
        }
    })
}

/// Extract `key` as `T`, treating absence as `Ok(None)`
pub fn extract_optional<T: Cast>(data: &Mapping, key: &str) -> Result<Option<T>, ExtractError> {
    extract(data, key, Presence::Optional)
}

/// Extract `key` as `T`, treating absence as an error
pub fn extract_required<T: Cast>(data: &Mapping, key: &str) -> Result<T, ExtractError> {
    extract(data, key, Presence::Required)?.ok_or_else(|| ExtractError::MissingKey {
        key: key.to_string(),
    })
}

/// Extract an optional `bool`
pub fn extract_bool_optional(data: &Mapping, key: &str) -> Result<Option<bool>, ExtractError> {
    extract_optional(data, key)
}

/// Extract a required `bool`
pub fn extract_bool_required(data: &Mapping, key: &str) -> Result<bool, ExtractError> {
    extract_required(data, key)
}

/// Extract an optional `i64`
pub fn extract_int_optional(data: &Mapping, key: &str) -> Result<Option<i64>, ExtractError> {
    extract_optional(data, key)
}

/// Extract a required `i64`
pub fn extract_int_required(data: &Mapping, key: &str) -> Result<i64, ExtractError> {
    extract_required(data, key)
}

/// Extract an optional `f64`
pub fn extract_float_optional(data: &Mapping, key: &str) -> Result<Option<f64>, ExtractError> {
    extract_optional(data, key)
}

/// Extract a required `f64`
pub fn extract_float_required(data: &Mapping, key: &str) -> Result<f64, ExtractError> {
    extract_required(data, key)
}

/// Extract an optional `String`
pub fn extract_string_optional(data: &Mapping, key: &str) -> Result<Option<String>, ExtractError> {
    extract_optional(data, key)
}

/// Extract a required `String`
pub fn extract_string_required(data: &Mapping, key: &str) -> Result<String, ExtractError> {
    extract_required(data, key)
}

/// Extract an optional [`Scalar`]
pub fn extract_scalar_optional(data: &Mapping, key: &str) -> Result<Option<Scalar>, ExtractError> {
    extract_optional(data, key)
}

/// Extract a required [`Scalar`]
pub fn extract_scalar_required(data: &Mapping, key: &str) -> Result<Scalar, ExtractError> {
    extract_required(data, key)
}

/// Extract an optional [`Array`] (mapping or list, top-level shape only)
pub fn extract_array_optional(data: &Mapping, key: &str) -> Result<Option<Array>, ExtractError> {
    extract_optional(data, key)
}

/// Extract a required [`Array`] (mapping or list, top-level shape only)
pub fn extract_array_required(data: &Mapping, key: &str) -> Result<Array, ExtractError> {
    extract_required(data, key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictcast_core::{SourceKind, TargetType, Value};

    fn data() -> Mapping {
        let mut map = Mapping::new();
        map.insert("num".into(), Value::from("123"));
        map.insert("flt".into(), Value::from(true));
        map.insert("meta".into(), Value::from("x"));
        map.insert("nothing".into(), Value::Null);
        map
    }

    #[test]
    fn test_present_and_valid() {
        assert_eq!(extract_int_required(&data(), "num"), Ok(123));
        assert_eq!(extract_int_optional(&data(), "num"), Ok(Some(123)));
        assert_eq!(extract_float_required(&data(), "num"), Ok(123.0));
        assert_eq!(extract_scalar_required(&data(), "num"), Ok(Scalar::Int(123)));
    }

    #[test]
    fn test_absent_optional_is_none_for_every_target() {
        let empty = Mapping::new();
        assert_eq!(extract_bool_optional(&empty, "flag"), Ok(None));
        assert_eq!(extract_int_optional(&empty, "flag"), Ok(None));
        assert_eq!(extract_float_optional(&empty, "flag"), Ok(None));
        assert_eq!(extract_string_optional(&empty, "flag"), Ok(None));
        assert_eq!(extract_scalar_optional(&empty, "flag"), Ok(None));
        assert_eq!(extract_array_optional(&empty, "flag"), Ok(None));
    }

    #[test]
    fn test_absent_required_is_missing_key() {
        let err = extract_string_required(&Mapping::new(), "name").unwrap_err();
        assert_eq!(err, ExtractError::MissingKey { key: "name".into() });
        assert_eq!(err.to_string(), "Missing required key 'name'.");
    }

    #[test]
    fn test_absent_required_message_for_every_target() {
        let empty = Mapping::new();
        let errors = [
            extract_bool_required(&empty, "k").unwrap_err(),
            extract_int_required(&empty, "k").unwrap_err(),
            extract_float_required(&empty, "k").unwrap_err(),
            extract_string_required(&empty, "k").unwrap_err(),
            extract_scalar_required(&empty, "k").unwrap_err(),
            extract_array_required(&empty, "k").unwrap_err(),
        ];
        for err in errors {
            assert_eq!(err, ExtractError::MissingKey { key: "k".into() });
            assert_eq!(err.to_string(), "Missing required key 'k'.");
            assert!(err.cause().is_none());
        }
    }

    #[test]
    fn test_invalid_value_in_both_modes() {
        let required = extract_float_required(&data(), "flt").unwrap_err();
        let optional = extract_float_optional(&data(), "flt").unwrap_err();
        assert_eq!(required, optional);
        assert_eq!(
            required.to_string(),
            "Invalid value at key 'flt' (expected float): Cannot cast boolean to float."
        );
    }

    #[test]
    fn test_null_is_present_not_absent() {
        let err = extract_bool_optional(&data(), "nothing").unwrap_err();
        assert_eq!(
            err.cause().map(|c| c.observed),
            Some(SourceKind::Null)
        );
    }

    #[test]
    fn test_array_shape_check() {
        let err = extract_array_required(&data(), "meta").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value at key 'meta' (expected array): Cannot cast string to array."
        );

        let mut map = data();
        map.insert("meta".into(), Value::map([("k", Value::Null)]));
        let array = extract_array_required(&map, "meta").unwrap();
        assert_eq!(array.len(), 1);
    }

    #[test]
    fn test_generic_extract_modes() {
        let map = data();
        assert_eq!(extract::<i64>(&map, "absent", Presence::Optional), Ok(None));
        assert!(matches!(
            extract::<i64>(&map, "absent", Presence::Required),
            Err(ExtractError::MissingKey { .. })
        ));
        assert!(matches!(
            extract::<String>(&map, "num", Presence::Required),
            Ok(Some(ref s)) if s == "123"
        ));
        assert_eq!(Presence::default(), Presence::Optional);
        assert_eq!(
            extract::<bool>(&map, "meta", Presence::Optional)
                .unwrap_err()
                .cause()
                .map(|c| c.target),
            Some(TargetType::Bool)
        );
    }
}
