//! Array target - nested mappings and lists

use crate::caster::reject;
use crate::{CastError, Mapping, TargetType, Value};

/// A nested collection value
///
/// Only the top-level shape is checked; elements are left as loosely-typed
/// [`Value`]s for the caller to cast individually.
#[derive(Debug, Clone, PartialEq)]
pub enum Array {
    /// String-keyed mapping
    Map(Mapping),

    /// Ordered sequence
    List(Vec<Value>),
}

impl Array {
    /// Number of entries
    pub fn len(&self) -> usize {
        match self {
            Array::Map(map) => map.len(),
            Array::List(items) => items.len(),
        }
    }

    /// Check if there are no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the mapping, if this is one
    pub fn as_map(&self) -> Option<&Mapping> {
        match self {
            Array::Map(map) => Some(map),
            Array::List(_) => None,
        }
    }

    /// Get the list, if this is one
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Array::Map(_) => None,
            Array::List(items) => Some(items),
        }
    }
}

impl From<Array> for Value {
    fn from(array: Array) -> Self {
        match array {
            Array::Map(map) => Value::Map(map),
            Array::List(items) => Value::List(items),
        }
    }
}

/// Cast to [`Array`]
///
/// Accepts mappings and lists; every other shape fails with target `array`.
pub fn to_array(value: &Value) -> Result<Array, CastError> {
    match value {
        Value::Map(map) => Ok(Array::Map(map.clone())),
        Value::List(items) => Ok(Array::List(items.clone())),
        other => Err(reject(other, TargetType::Array)),
    }
}
