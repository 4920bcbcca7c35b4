//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use strictcast_core::{TargetType, Value};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Result of a single get or cast, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// Key that was extracted (`None` for literal casts)
    pub key: Option<String>,

    /// Requested target type
    pub target: TargetType,

    /// Cast value, or `None` when an optional key was absent
    pub value: Option<Value>,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format an outcome.
    pub fn format_outcome(&self, outcome: &Outcome) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_outcome_json(outcome),
            OutputFormat::Table => Ok(self.format_outcome_table(outcome)),
            OutputFormat::Quiet => Ok(self.format_outcome_quiet(outcome)),
        }
    }

    /// Format an outcome as JSON.
    fn format_outcome_json(&self, outcome: &Outcome) -> Result<String> {
        let json = serde_json::json!({
            "key": outcome.key.as_deref(),
            "expected": outcome.target.as_str(),
            "present": outcome.value.is_some(),
            "value": outcome.value.as_ref().map(Value::to_json),
        });

        Ok(serde_json::to_string_pretty(&json)?)
    }

    /// Format an outcome as a table.
    fn format_outcome_table(&self, outcome: &Outcome) -> String {
        let key = outcome.key.as_deref().unwrap_or("-");
        let (kind, value) = match &outcome.value {
            Some(value) => (value.kind().as_str().to_string(), value.to_string()),
            None => ("-".to_string(), self.highlight("(no value)")),
        };

        let mut builder = Builder::default();
        builder.push_record(["Key", "Expected", "Kind", "Value"]);
        builder.push_record([key, outcome.target.as_str(), kind.as_str(), value.as_str()]);

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format an outcome in quiet mode (bare value, strings unquoted).
    fn format_outcome_quiet(&self, outcome: &Outcome) -> String {
        match &outcome.value {
            Some(Value::String(s)) => s.clone(),
            Some(value) => value.to_string(),
            None => String::new(),
        }
    }

    /// Highlight a placeholder in yellow if color is enabled.
    fn highlight(&self, text: &str) -> String {
        if self.color_enabled {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }
}
