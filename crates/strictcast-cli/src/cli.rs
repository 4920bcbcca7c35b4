//! CLI command definitions and argument parsing.

use crate::config::{InputFormat, OutputFormat};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use strictcast_core::TargetType;

/// strictcast - Strictly cast values out of JSON and TOML documents.
#[derive(Debug, Parser)]
#[command(name = "strictcast")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "STRICTCAST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (bare value)
    Quiet,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => OutputFormat::Table,
            CliFormat::Json => OutputFormat::Json,
            CliFormat::Quiet => OutputFormat::Quiet,
        }
    }
}

/// Target type options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliTarget {
    /// Boolean (true/false, 0/1, "0"/"1")
    Bool,
    /// Integer (integers, digit-only strings)
    Int,
    /// Float (floats, integers, "digits[.digits]" strings)
    Float,
    /// String (strings only)
    String,
    /// First of bool, int, float, string that succeeds
    Scalar,
    /// Mapping or list
    Array,
}

impl From<CliTarget> for TargetType {
    fn from(target: CliTarget) -> Self {
        match target {
            CliTarget::Bool => TargetType::Bool,
            CliTarget::Int => TargetType::Int,
            CliTarget::Float => TargetType::Float,
            CliTarget::String => TargetType::String,
            CliTarget::Scalar => TargetType::Scalar,
            CliTarget::Array => TargetType::Array,
        }
    }
}

/// Input document format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliInput {
    /// Infer from the file extension
    Auto,
    /// JSON document
    Json,
    /// TOML document
    Toml,
}

impl From<CliInput> for InputFormat {
    fn from(input: CliInput) -> Self {
        match input {
            CliInput::Auto => InputFormat::Auto,
            CliInput::Json => InputFormat::Json,
            CliInput::Toml => InputFormat::Toml,
        }
    }
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract a top-level key from a document and cast it
    Get(GetArgs),

    /// Cast a single literal value
    Cast(CastArgs),
}

/// Arguments for the get command.
#[derive(Debug, Parser)]
pub struct GetArgs {
    /// Document to read (JSON or TOML)
    pub file: PathBuf,

    /// Top-level key to extract
    pub key: String,

    /// Target type
    #[arg(short = 't', long = "as", value_enum)]
    pub target: CliTarget,

    /// Fail when the key is absent instead of reporting no value
    #[arg(short, long)]
    pub required: bool,

    /// Document format (overrides the configured default)
    #[arg(short, long, value_enum)]
    pub input: Option<CliInput>,
}

/// Arguments for the cast command.
#[derive(Debug, Parser)]
pub struct CastArgs {
    /// Literal to cast; parsed as JSON, otherwise taken as a raw string
    pub literal: String,

    /// Target type
    #[arg(short = 't', long = "as", value_enum)]
    pub target: CliTarget,
}
