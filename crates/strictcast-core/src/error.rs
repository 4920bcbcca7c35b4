//! Error types for casting

use crate::{SourceKind, TargetType};
use thiserror::Error;

/// A value's shape is not accepted by the requested caster
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Cannot cast {observed} to {target}.")]
pub struct CastError {
    /// Shape of the rejected value
    pub observed: SourceKind,

    /// Type the caster was asked to produce
    pub target: TargetType,
}

impl CastError {
    /// Create a new cast error
    pub fn new(observed: SourceKind, target: TargetType) -> Self {
        Self { observed, target }
    }
}
