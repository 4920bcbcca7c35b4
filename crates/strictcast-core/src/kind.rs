//! Shape labels used in cast failure messages

use std::fmt;

/// Observed shape of a source value
///
/// Labels are fixed so failure messages stay stable across platforms and
/// decoders; they never come from runtime type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// Native boolean
    Boolean,

    /// Native integer
    Integer,

    /// Native floating-point number
    Float,

    /// Text
    String,

    /// Ordered sequence of values
    List,

    /// String-keyed mapping
    Mapping,

    /// Explicit null
    Null,

    /// A value the decoder could not represent
    Opaque,
}

impl SourceKind {
    /// Get the label used in failure messages
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Boolean => "boolean",
            SourceKind::Integer => "integer",
            SourceKind::Float => "floating-point",
            SourceKind::String => "string",
            SourceKind::List => "list",
            SourceKind::Mapping => "mapping",
            SourceKind::Null => "null",
            SourceKind::Opaque => "opaque",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type a caster converts into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetType {
    /// `bool`
    Bool,

    /// `i64`
    Int,

    /// `f64`
    Float,

    /// `String`
    String,

    /// [`Scalar`](crate::Scalar) union
    Scalar,

    /// [`Array`](crate::Array), a mapping or list
    Array,
}

impl TargetType {
    /// All targets, in declaration order
    pub const ALL: [TargetType; 6] = [
        TargetType::Bool,
        TargetType::Int,
        TargetType::Float,
        TargetType::String,
        TargetType::Scalar,
        TargetType::Array,
    ];

    /// Get the label used in failure messages
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetType::Bool => "bool",
            TargetType::Int => "int",
            TargetType::Float => "float",
            TargetType::String => "string",
            TargetType::Scalar => "scalar",
            TargetType::Array => "array",
        }
    }

    /// Parse a target from its label
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "bool" => Some(TargetType::Bool),
            "int" => Some(TargetType::Int),
            "float" => Some(TargetType::Float),
            "string" => Some(TargetType::String),
            "scalar" => Some(TargetType::Scalar),
            "array" => Some(TargetType::Array),
            _ => None,
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TargetType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid target type: {}", s))
    }
}
