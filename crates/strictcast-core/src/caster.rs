//! Strict casters from [`Value`] into exact target types
//!
//! Every caster accepts a small, explicit set of input shapes and rejects
//! everything else. There is no truthiness, no truncation and no trimming:
//! a float is never an int, a boolean is never a number, and `"true"` is not
//! a boolean.

use crate::{CastError, TargetType, Value};

pub use crate::array::to_array;
pub use crate::scalar::to_scalar;

/// Cast to `bool`
///
/// Accepts a native boolean, the integers `0`/`1` and the strings `"0"`/`"1"`.
pub fn to_bool(value: &Value) -> Result<bool, CastError> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::Int(0) => Ok(false),
        Value::Int(1) => Ok(true),
        Value::String(s) if s == "0" => Ok(false),
        Value::String(s) if s == "1" => Ok(true),
        other => Err(reject(other, TargetType::Bool)),
    }
}

/// Cast to `i64`
///
/// Accepts a native integer or a non-empty string of ASCII digits. Digit
/// strings too large for `i64` are rejected like any other invalid string.
pub fn to_int(value: &Value) -> Result<i64, CastError> {
    match value {
        Value::Int(n) => Ok(*n),
        Value::String(s) if is_digits(s) => s
            .parse::<i64>()
            .map_err(|_| reject(value, TargetType::Int)),
        other => Err(reject(other, TargetType::Int)),
    }
}

/// Cast to `f64`
///
/// Accepts a native float, a native integer (widened with `as f64`) or a
/// string of the form `digits` or `digits.digits`. Strings too large to
/// parse to a finite `f64` are rejected, mirroring integer overflow.
pub fn to_float(value: &Value) -> Result<f64, CastError> {
    match value {
        Value::Float(x) => Ok(*x),
        Value::Int(n) => Ok(*n as f64),
        Value::String(s) if is_plain_decimal(s) => s
            .parse::<f64>()
            .ok()
            .filter(|x| x.is_finite())
            .ok_or_else(|| reject(value, TargetType::Float)),
        other => Err(reject(other, TargetType::Float)),
    }
}

/// Cast to `String`
///
/// Only native strings are accepted; the text is returned as-is.
pub fn to_string(value: &Value) -> Result<String, CastError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(reject(other, TargetType::String)),
    }
}

pub(crate) fn reject(value: &Value, target: TargetType) -> CastError {
    CastError::new(value.kind(), target)
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// `digits ( "." digits )?`
fn is_plain_decimal(s: &str) -> bool {
    match s.split_once('.') {
        Some((whole, frac)) => is_digits(whole) && is_digits(frac),
        None => is_digits(s),
    }
}
