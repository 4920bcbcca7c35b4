//! Adapters from decoded documents into [`Value`]
//!
//! The casting rules do not care where a value came from. These conversions
//! cover the two decoders the workspace uses (JSON via `serde_json`, TOML via
//! `toml`) and are gated behind the `json` and `toml` features.

use crate::{Mapping, SourceKind, Value};
use thiserror::Error;

/// Errors that can occur while decoding a document into a [`Mapping`]
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Malformed JSON
    #[cfg(feature = "json")]
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed TOML
    #[cfg(feature = "toml")]
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The document parsed but its root is not a mapping
    #[error("Document root must be a mapping, found {0}")]
    NotAMapping(SourceKind),
}

#[cfg(feature = "json")]
mod json {
    use super::*;

    impl From<serde_json::Value> for Value {
        fn from(json: serde_json::Value) -> Self {
            match json {
                serde_json::Value::Null => Value::Null,
                serde_json::Value::Bool(b) => Value::Bool(b),
                serde_json::Value::Number(n) => {
                    if let Some(i) = n.as_i64() {
                        Value::Int(i)
                    } else if let Some(x) = n.as_f64().filter(|_| n.is_f64()) {
                        Value::Float(x)
                    } else {
                        // Integers past i64::MAX have no lossless shape here
                        Value::Opaque("integer".to_string())
                    }
                }
                serde_json::Value::String(s) => Value::String(s),
                serde_json::Value::Array(items) => {
                    Value::List(items.into_iter().map(Value::from).collect())
                }
                serde_json::Value::Object(obj) => Value::Map(
                    obj.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
                ),
            }
        }
    }

    /// Non-finite floats become `null`; opaque values become their description.
    impl From<&Value> for serde_json::Value {
        fn from(value: &Value) -> Self {
            match value {
                Value::Null => serde_json::Value::Null,
                Value::Bool(b) => serde_json::Value::Bool(*b),
                Value::Int(n) => serde_json::Value::from(*n),
                Value::Float(x) => serde_json::Number::from_f64(*x)
                    .map(serde_json::Value::Number)
                    .unwrap_or(serde_json::Value::Null),
                Value::String(s) => serde_json::Value::String(s.clone()),
                Value::List(items) => {
                    serde_json::Value::Array(items.iter().map(serde_json::Value::from).collect())
                }
                Value::Map(map) => serde_json::Value::Object(
                    map.iter()
                        .map(|(k, v)| (k.clone(), serde_json::Value::from(v)))
                        .collect(),
                ),
                Value::Opaque(desc) => serde_json::Value::String(desc.clone()),
            }
        }
    }

    impl Value {
        /// Parse a JSON document into a value
        pub fn from_json_str(text: &str) -> Result<Value, DecodeError> {
            let json: serde_json::Value = serde_json::from_str(text)?;
            Ok(Value::from(json))
        }

        /// Convert into a JSON value
        pub fn to_json(&self) -> serde_json::Value {
            serde_json::Value::from(self)
        }
    }

    /// Parse a JSON document whose root is an object
    pub fn mapping_from_json_str(text: &str) -> Result<Mapping, DecodeError> {
        match Value::from_json_str(text)? {
            Value::Map(map) => Ok(map),
            other => Err(DecodeError::NotAMapping(other.kind())),
        }
    }
}

#[cfg(feature = "toml")]
mod toml_adapter {
    use super::*;

    impl From<toml::Value> for Value {
        fn from(value: toml::Value) -> Self {
            match value {
                toml::Value::String(s) => Value::String(s),
                toml::Value::Integer(n) => Value::Int(n),
                toml::Value::Float(x) => Value::Float(x),
                toml::Value::Boolean(b) => Value::Bool(b),
                toml::Value::Datetime(_) => Value::Opaque("datetime".to_string()),
                toml::Value::Array(items) => {
                    Value::List(items.into_iter().map(Value::from).collect())
                }
                toml::Value::Table(table) => Value::Map(table_to_mapping(table)),
            }
        }
    }

    pub(super) fn table_to_mapping(table: toml::Table) -> Mapping {
        table.into_iter().map(|(k, v)| (k, Value::from(v))).collect()
    }

    /// Parse a TOML document into a mapping
    pub fn mapping_from_toml_str(text: &str) -> Result<Mapping, DecodeError> {
        let table: toml::Table = toml::from_str(text)?;
        Ok(table_to_mapping(table))
    }
}

#[cfg(feature = "json")]
pub use json::mapping_from_json_str;

#[cfg(feature = "toml")]
pub use toml_adapter::mapping_from_toml_str;
