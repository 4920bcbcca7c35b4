//! Document and literal decoding.

use crate::config::InputFormat;
use crate::error::{CliError, Result};
use std::fs;
use std::path::Path;
use strictcast_core::decode::{mapping_from_json_str, mapping_from_toml_str};
use strictcast_core::{Mapping, Value};
use tracing::debug;

/// Decide the concrete format for a document.
pub fn resolve_format(path: &Path, format: InputFormat) -> Result<InputFormat> {
    if format != InputFormat::Auto {
        return Ok(format);
    }

    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(InputFormat::Json),
        Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(InputFormat::Toml),
        _ => Err(CliError::InvalidInput(format!(
            "Cannot infer format of {}; pass --input json or --input toml",
            path.display()
        ))),
    }
}

/// Read and decode a document into a mapping.
pub fn load_document(path: &Path, format: InputFormat) -> Result<Mapping> {
    let format = resolve_format(path, format)?;
    let contents = fs::read_to_string(path)?;
    debug!(path = %path.display(), ?format, bytes = contents.len(), "Decoding document");

    let mapping = match format {
        InputFormat::Toml => mapping_from_toml_str(&contents)?,
        InputFormat::Json | InputFormat::Auto => mapping_from_json_str(&contents)?,
    };
    Ok(mapping)
}

/// Parse a command-line literal as JSON, falling back to a raw string.
pub fn parse_literal(literal: &str) -> Value {
    Value::from_json_str(literal).unwrap_or_else(|_| Value::String(literal.to_string()))
}
