//! Trait interface for castable target types

use crate::array::to_array;
use crate::caster::{to_bool, to_float, to_int, to_scalar, to_string};
use crate::{Array, CastError, Scalar, TargetType, Value};

/// A type that a [`Value`] can be strictly cast into
///
/// Lets extraction code stay generic over the target while each impl
/// delegates to the matching caster function.
pub trait Cast: Sized {
    /// Target reported in failures
    const TARGET: TargetType;

    /// Cast a value into `Self`
    fn cast(value: &Value) -> Result<Self, CastError>;
}

impl Cast for bool {
    const TARGET: TargetType = TargetType::Bool;

    fn cast(value: &Value) -> Result<Self, CastError> {
        to_bool(value)
    }
}

impl Cast for i64 {
    const TARGET: TargetType = TargetType::Int;

    fn cast(value: &Value) -> Result<Self, CastError> {
        to_int(value)
    }
}

impl Cast for f64 {
    const TARGET: TargetType = TargetType::Float;

    fn cast(value: &Value) -> Result<Self, CastError> {
        to_float(value)
    }
}

impl Cast for String {
    const TARGET: TargetType = TargetType::String;

    fn cast(value: &Value) -> Result<Self, CastError> {
        to_string(value)
    }
}

impl Cast for Scalar {
    const TARGET: TargetType = TargetType::Scalar;

    fn cast(value: &Value) -> Result<Self, CastError> {
        to_scalar(value)
    }
}

impl Cast for Array {
    const TARGET: TargetType = TargetType::Array;

    fn cast(value: &Value) -> Result<Self, CastError> {
        to_array(value)
    }
}

/// Cast a value into any [`Cast`] type
///
/// ```
/// use strictcast_core::{traits::cast, Value};
///
/// let port: i64 = cast(&Value::from("8080")).unwrap();
/// assert_eq!(port, 8080);
/// ```
pub fn cast<T: Cast>(value: &Value) -> Result<T, CastError> {
    T::cast(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failures_report_impl_target() {
        let value = Value::Null;
        assert_eq!(cast::<bool>(&value).unwrap_err().target, bool::TARGET);
        assert_eq!(cast::<i64>(&value).unwrap_err().target, i64::TARGET);
        assert_eq!(cast::<f64>(&value).unwrap_err().target, f64::TARGET);
        assert_eq!(cast::<String>(&value).unwrap_err().target, String::TARGET);
        assert_eq!(cast::<Scalar>(&value).unwrap_err().target, Scalar::TARGET);
        assert_eq!(cast::<Array>(&value).unwrap_err().target, Array::TARGET);
    }
}
