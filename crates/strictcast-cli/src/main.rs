//! strictcast CLI - Strictly cast values out of JSON and TOML documents.

use clap::Parser;
use strictcast_cli::config::OutputFormat;
use strictcast_cli::{commands, logging, Cli, Command, Config, Formatter};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> strictcast_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    logging::init(cli.verbose, &config.settings.log_level);

    // Determine output format
    let format: OutputFormat = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    let output = match cli.command {
        Command::Get(args) => commands::execute_get(args, &config, &formatter)?,
        Command::Cast(args) => commands::execute_cast(args, &formatter)?,
    };

    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}
