//! Cast command implementation.

use super::cast_to;
use crate::cli::CastArgs;
use crate::error::Result;
use crate::input::parse_literal;
use crate::output::{Formatter, Outcome};
use strictcast_core::TargetType;
use tracing::info;

/// Execute the cast command and return the rendered output.
pub fn execute_cast(args: CastArgs, formatter: &Formatter) -> Result<String> {
    let target: TargetType = args.target.into();
    let value = parse_literal(&args.literal);
    info!(%target, observed = %value.kind(), "Casting literal");

    let cast = cast_to(target, &value)?;

    formatter.format_outcome(&Outcome {
        key: None,
        target,
        value: Some(cast),
    })
}
