//! Get command implementation.

use super::extract_as;
use crate::cli::GetArgs;
use crate::config::{Config, InputFormat};
use crate::error::Result;
use crate::input::load_document;
use crate::output::{Formatter, Outcome};
use strictcast_core::TargetType;
use strictcast_extract::Presence;
use tracing::info;

/// Execute the get command and return the rendered output.
pub fn execute_get(args: GetArgs, config: &Config, formatter: &Formatter) -> Result<String> {
    let input: InputFormat = args.input.map(Into::into).unwrap_or(config.settings.input);
    let target: TargetType = args.target.into();
    let presence = if args.required {
        Presence::Required
    } else {
        Presence::Optional
    };

    let data = load_document(&args.file, input)?;
    info!(key = %args.key, %target, entries = data.len(), "Extracting key");

    let value = extract_as(target, &data, &args.key, presence)?;

    formatter.format_outcome(&Outcome {
        key: Some(args.key),
        target,
        value,
    })
}
