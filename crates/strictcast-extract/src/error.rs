//! Error types for extraction

use strictcast_core::{CastError, TargetType};
use thiserror::Error;

/// Errors that can occur while extracting a keyed value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// A required key is absent from the mapping
    #[error("Missing required key '{key}'.")]
    MissingKey {
        /// Key that was looked up
        key: String,
    },

    /// The key is present but its value does not cast to the expected type
    #[error("Invalid value at key '{key}' (expected {expected}): {cause}")]
    InvalidValue {
        /// Key that was looked up
        key: String,
        /// Type the caller asked for
        expected: TargetType,
        /// Underlying cast failure
        #[source]
        cause: CastError,
    },
}

impl ExtractError {
    /// Get the key this error refers to
    pub fn key(&self) -> &str {
        match self {
            ExtractError::MissingKey { key } | ExtractError::InvalidValue { key, .. } => key,
        }
    }

    /// Get the underlying cast failure, if any
    pub fn cause(&self) -> Option<&CastError> {
        match self {
            ExtractError::MissingKey { .. } => None,
            ExtractError::InvalidValue { cause, .. } => Some(cause),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use strictcast_core::SourceKind;

    #[test]
    fn test_missing_key_message() {
        let err = ExtractError::MissingKey { key: "port".into() };
        assert_eq!(err.to_string(), "Missing required key 'port'.");
        assert!(err.source().is_none());
        assert!(err.cause().is_none());
    }

    #[test]
    fn test_invalid_value_chains_cause() {
        let cause = CastError::new(SourceKind::String, TargetType::Array);
        let err = ExtractError::InvalidValue {
            key: "meta".into(),
            expected: TargetType::Array,
            cause,
        };

        assert_eq!(
            err.to_string(),
            "Invalid value at key 'meta' (expected array): Cannot cast string to array."
        );
        assert_eq!(err.key(), "meta");
        assert_eq!(
            err.source().map(ToString::to_string).as_deref(),
            Some("Cannot cast string to array.")
        );
    }
}
