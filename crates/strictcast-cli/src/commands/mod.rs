//! Command implementations.

pub mod cast;
pub mod get;

pub use self::cast::execute_cast;
pub use self::get::execute_get;

use strictcast_core::traits::cast as cast_value;
use strictcast_core::{Array, CastError, Mapping, Scalar, TargetType, Value};
use strictcast_extract::{extract, ExtractError, Presence};

/// Cast a value to a target chosen at runtime, keeping the result as a [`Value`].
pub(crate) fn cast_to(target: TargetType, value: &Value) -> Result<Value, CastError> {
    match target {
        TargetType::Bool => cast_value::<bool>(value).map(Value::from),
        TargetType::Int => cast_value::<i64>(value).map(Value::from),
        TargetType::Float => cast_value::<f64>(value).map(Value::from),
        TargetType::String => cast_value::<String>(value).map(Value::from),
        TargetType::Scalar => cast_value::<Scalar>(value).map(Value::from),
        TargetType::Array => cast_value::<Array>(value).map(Value::from),
    }
}

/// Extract a key as a target chosen at runtime, keeping the result as a [`Value`].
pub(crate) fn extract_as(
    target: TargetType,
    data: &Mapping,
    key: &str,
    presence: Presence,
) -> Result<Option<Value>, ExtractError> {
    match target {
        TargetType::Bool => extract::<bool>(data, key, presence).map(|v| v.map(Value::from)),
        TargetType::Int => extract::<i64>(data, key, presence).map(|v| v.map(Value::from)),
        TargetType::Float => extract::<f64>(data, key, presence).map(|v| v.map(Value::from)),
        TargetType::String => extract::<String>(data, key, presence).map(|v| v.map(Value::from)),
        TargetType::Scalar => extract::<Scalar>(data, key, presence).map(|v| v.map(Value::from)),
        TargetType::Array => extract::<Array>(data, key, presence).map(|v| v.map(Value::from)),
    }
}
