//! Value module - the closed union of decoded shapes

use crate::SourceKind;
use indexmap::IndexMap;
use std::fmt;

/// String-keyed mapping of values
///
/// Keys are unique and keep the order they were inserted in, so a decoded
/// document iterates in document order.
pub type Mapping = IndexMap<String, Value>;

/// A loosely-typed value as produced by a decoder
///
/// Casters only ever read a `Value`; none of them mutate or consume it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Explicit null
    #[default]
    Null,

    /// Native boolean
    Bool(bool),

    /// Native integer
    Int(i64),

    /// Native floating-point number
    Float(f64),

    /// Text
    String(String),

    /// Ordered sequence
    List(Vec<Value>),

    /// Nested mapping
    Map(Mapping),

    /// A foreign value with no native representation, described by the
    /// decoder that produced it (e.g. `"datetime"`)
    Opaque(String),
}

impl Value {
    /// Get the observed shape of this value
    pub fn kind(&self) -> SourceKind {
        match self {
            Value::Null => SourceKind::Null,
            Value::Bool(_) => SourceKind::Boolean,
            Value::Int(_) => SourceKind::Integer,
            Value::Float(_) => SourceKind::Float,
            Value::String(_) => SourceKind::String,
            Value::List(_) => SourceKind::List,
            Value::Map(_) => SourceKind::Mapping,
            Value::Opaque(_) => SourceKind::Opaque,
        }
    }

    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Build a mapping value from key/value pairs
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Mapping> for Value {
    fn from(map: Mapping) -> Self {
        Value::Map(map)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(Value::Null)
    }
}

/// Renders in a JSON-like notation; opaque values render as `<description>`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            // Debug keeps the trailing ".0" on integral floats
            Value::Float(x) => write!(f, "{:?}", x),
            Value::String(s) => write!(f, "{:?}", s),
            Value::List(items) => {
                f.write_str("[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Map(map) => {
                f.write_str("{")?;
                for (idx, (key, item)) in map.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{:?}: {}", key, item)?;
                }
                f.write_str("}")
            }
            Value::Opaque(desc) => write!(f, "<{}>", desc),
        }
    }
}
