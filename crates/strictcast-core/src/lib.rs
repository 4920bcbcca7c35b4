//! strictcast Core
//!
//! The value model and strict casting rules shared by every other crate in
//! the workspace. Decoded data (config files, request bodies, payloads) is
//! represented as a closed [`Value`] union, and each caster converts a single
//! value into an exact target type or reports a [`CastError`].
//!
//! ## Key Concepts
//!
//! - **Value**: a closed tagged union of the shapes decoded data can take
//! - **SourceKind**: the observed shape of a value, with a stable label
//! - **TargetType**: what a caster produces (`bool`, `int`, `float`, `string`,
//!   `scalar`, `array`)
//! - **Cast**: a single-step strict conversion with no fallback beyond the
//!   explicitly accepted shapes
//!
//! ## Casting Rules
//!
//! | Target   | Accepts                                                    |
//! |----------|------------------------------------------------------------|
//! | `bool`   | booleans, the integers `0`/`1`, the strings `"0"`/`"1"`    |
//! | `int`    | integers, strings of ASCII digits only                     |
//! | `float`  | floats, integers, strings of the form `digits[.digits]`    |
//! | `string` | strings only, returned untouched                           |
//! | `scalar` | first success of `bool`, `int`, `float`, `string`          |
//! | `array`  | mappings and lists (top-level shape only)                  |
//!
//! ## Example
//!
//! ```
//! use strictcast_core::{caster, Scalar, Value};
//!
//! assert_eq!(caster::to_int(&Value::from("00123")), Ok(123));
//! assert_eq!(caster::to_scalar(&Value::from("1")), Ok(Scalar::Bool(true)));
//!
//! let err = caster::to_float(&Value::Bool(true)).unwrap_err();
//! assert_eq!(err.to_string(), "Cannot cast boolean to float.");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod array;
pub mod caster;
pub mod error;
pub mod kind;
pub mod scalar;
pub mod traits;
pub mod value;

#[cfg(any(feature = "json", feature = "toml"))]
pub mod decode;

// Re-exports for convenience
pub use array::Array;
pub use error::CastError;
pub use kind::{SourceKind, TargetType};
pub use scalar::Scalar;
pub use traits::Cast;
pub use value::{Mapping, Value};

#[cfg(any(feature = "json", feature = "toml"))]
pub use decode::DecodeError;
