//! Borrowed view for pulling several keys out of one mapping

use crate::extractor::{extract_optional, extract_required};
use crate::ExtractError;
use strictcast_core::{Cast, Mapping, Value};

/// A read-only view over a [`Mapping`]
///
/// ```
/// use strictcast_core::Value;
/// use strictcast_extract::Fields;
///
/// let Value::Map(body) = Value::map([("port", Value::from("8080"))]) else {
///     unreachable!()
/// };
/// let fields = Fields::new(&body);
///
/// let port: i64 = fields.required("port").unwrap();
/// let verbose: bool = fields.or("verbose", false).unwrap();
/// assert_eq!((port, verbose), (8080, false));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a> {
    data: &'a Mapping,
}

impl<'a> Fields<'a> {
    /// Create a view over `data`
    pub fn new(data: &'a Mapping) -> Self {
        Self { data }
    }

    /// Extract `key` as `T`; absence yields `Ok(None)`
    pub fn optional<T: Cast>(&self, key: &str) -> Result<Option<T>, ExtractError> {
        extract_optional(self.data, key)
    }

    /// Extract `key` as `T`; absence is an error
    pub fn required<T: Cast>(&self, key: &str) -> Result<T, ExtractError> {
        extract_required(self.data, key)
    }

    /// Extract `key` as `T`, falling back to `default` only when absent
    ///
    /// A present value that fails to cast is still an error.
    pub fn or<T: Cast>(&self, key: &str, default: T) -> Result<T, ExtractError> {
        Ok(self.optional(key)?.unwrap_or(default))
    }

    /// Check if `key` is present, regardless of its value
    pub fn contains(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Get the raw value at `key`
    pub fn raw(&self, key: &str) -> Option<&'a Value> {
        self.data.get(key)
    }
}

impl<'a> From<&'a Mapping> for Fields<'a> {
    fn from(data: &'a Mapping) -> Self {
        Self::new(data)
    }
}
