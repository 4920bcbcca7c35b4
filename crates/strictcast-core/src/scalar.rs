//! Scalar union and its resolution order

use crate::caster::{reject, to_bool, to_float, to_int, to_string};
use crate::{CastError, TargetType, Value};
use std::fmt;

/// Result of a scalar cast: exactly one of bool, int, float or string
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Boolean
    Bool(bool),

    /// Integer
    Int(i64),

    /// Floating-point number
    Float(f64),

    /// Text
    String(String),
}

impl Scalar {
    /// Get the target type this scalar committed to
    pub fn target(&self) -> TargetType {
        match self {
            Scalar::Bool(_) => TargetType::Bool,
            Scalar::Int(_) => TargetType::Int,
            Scalar::Float(_) => TargetType::Float,
            Scalar::String(_) => TargetType::String,
        }
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Bool(b) => Value::Bool(b),
            Scalar::Int(n) => Value::Int(n),
            Scalar::Float(x) => Value::Float(x),
            Scalar::String(s) => Value::String(s),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Value::from(self.clone()), f)
    }
}

type Converter = fn(&Value) -> Result<Scalar, CastError>;

/// Converters tried by [`to_scalar`], highest priority first
const RESOLUTION_ORDER: [Converter; 4] = [
    |v: &Value| to_bool(v).map(Scalar::Bool),
    |v: &Value| to_int(v).map(Scalar::Int),
    |v: &Value| to_float(v).map(Scalar::Float),
    |v: &Value| to_string(v).map(Scalar::String),
];

/// Cast to the [`Scalar`] union
///
/// Tries `bool`, `int`, `float` and `string` in that order and commits to the
/// first that succeeds, so `"1"` resolves to `Scalar::Bool(true)` and `"2"` to
/// `Scalar::Int(2)`. Callers that need numeric semantics for `"0"`/`"1"` must
/// use [`to_int`] or [`to_float`] directly.
pub fn to_scalar(value: &Value) -> Result<Scalar, CastError> {
    RESOLUTION_ORDER
        .iter()
        .find_map(|convert| convert(value).ok())
        .ok_or_else(|| reject(value, TargetType::Scalar))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mapping, SourceKind};

    #[test]
    fn test_bool_wins_tie_break() {
        assert_eq!(to_scalar(&Value::from("1")), Ok(Scalar::Bool(true)));
        assert_eq!(to_scalar(&Value::from("0")), Ok(Scalar::Bool(false)));
        assert_eq!(to_scalar(&Value::Int(1)), Ok(Scalar::Bool(true)));
    }

    #[test]
    fn test_resolution_order() {
        assert_eq!(to_scalar(&Value::from("2")), Ok(Scalar::Int(2)));
        assert_eq!(to_scalar(&Value::Int(42)), Ok(Scalar::Int(42)));
        assert_eq!(to_scalar(&Value::from("2.5")), Ok(Scalar::Float(2.5)));
        assert_eq!(to_scalar(&Value::Float(1.0)), Ok(Scalar::Float(1.0)));
        assert_eq!(to_scalar(&Value::from("abc")), Ok(Scalar::String("abc".into())));
        assert_eq!(to_scalar(&Value::from("-3")), Ok(Scalar::String("-3".into())));
    }

    #[test]
    fn test_non_scalars_fail() {
        let err = to_scalar(&Value::List(vec![])).unwrap_err();
        assert_eq!(err.to_string(), "Cannot cast list to scalar.");

        let err = to_scalar(&Value::Map(Mapping::new())).unwrap_err();
        assert_eq!(err.observed, SourceKind::Mapping);

        assert!(to_scalar(&Value::Null).is_err());
    }

    #[test]
    fn test_committed_tag() {
        assert_eq!(Scalar::Float(0.5).target(), TargetType::Float);
        assert_eq!(Scalar::String("x".into()).to_string(), "\"x\"");
    }
}
