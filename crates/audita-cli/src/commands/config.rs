//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
pub fn execute_config(args: ConfigArgs, config: &Config, path: &Path, formatter: &Formatter) -> Result<()> {
    match args.action {
        ConfigAction::Show => show_config(config, formatter),
        ConfigAction::Path => {
            println!("{}", path.display());
            Ok(())
        }
        ConfigAction::Reset => reset_config(path, formatter),
    }
}

/// Print the configuration in effect.
fn show_config(config: &Config, formatter: &Formatter) -> Result<()> {
    match formatter.format() {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(config)?),
        OutputFormat::Table | OutputFormat::Quiet => print!("{}", config.to_toml()?),
    }
    Ok(())
}

/// Overwrite the configuration file with defaults.
fn reset_config(path: &Path, formatter: &Formatter) -> Result<()> {
    Config::default().save_to(path)?;
    println!(
        "{}",
        formatter.success(&format!("Configuration reset at {}", path.display()))
    );
    Ok(())
}
