//! strictcast Extract
//!
//! Looks up a key in a loosely-typed [`Mapping`] and strictly casts its value,
//! keeping "key absent" distinct from "key present but invalid".
//!
//! # Overview
//!
//! ```text
//! caller → extract(mapping, key, presence) → lookup → Cast::cast → result
//!                                                         ↓
//!                                       ExtractError { key, expected, cause }
//! ```
//!
//! # Modes
//!
//! - **Optional**: an absent key yields `Ok(None)`
//! - **Required**: an absent key yields [`ExtractError::MissingKey`]
//!
//! In both modes a present value that fails to cast yields
//! [`ExtractError::InvalidValue`], which chains the underlying
//! [`CastError`](strictcast_core::CastError) as its `source()`.
//!
//! # Example Usage
//!
//! ```
//! use strictcast_core::{Mapping, Value};
//! use strictcast_extract::{extract_bool_optional, extract_float_required, extract_int_required};
//!
//! let mut data = Mapping::new();
//! data.insert("num".to_string(), Value::from("123"));
//! data.insert("flt".to_string(), Value::from(true));
//!
//! assert_eq!(extract_int_required(&data, "num").unwrap(), 123);
//! assert_eq!(extract_bool_optional(&data, "flag").unwrap(), None);
//!
//! let err = extract_float_required(&data, "flt").unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Invalid value at key 'flt' (expected float): Cannot cast boolean to float."
//! );
//! ```

#![warn(missing_docs)]

mod error;
mod extractor;
mod fields;

pub use error::ExtractError;
pub use extractor::{
    extract, extract_array_optional, extract_array_required, extract_bool_optional,
    extract_bool_required, extract_float_optional, extract_float_required, extract_int_optional,
    extract_int_required, extract_optional, extract_required, extract_scalar_optional,
    extract_scalar_required, extract_string_optional, extract_string_required, Presence,
};
pub use fields::Fields;

pub use strictcast_core::{Array, Cast, Mapping, Scalar, TargetType, Value};
