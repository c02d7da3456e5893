//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Audita CLI - Audit Colombian clinical-record PDFs.
#[derive(Debug, Parser)]
#[command(name = "audita")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "AUDITA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (machine-readable lines only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Audit a clinical-record PDF
    Audit(AuditArgs),

    /// Search a clinical-record PDF for a term
    Search(SearchArgs),

    /// Show the regulatory checklist and its keywords
    Checklist,

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Arguments for the audit command.
#[derive(Debug, Parser)]
pub struct AuditArgs {
    /// PDF file to audit
    pub file: PathBuf,

    /// Also print the extracted text of every page
    #[arg(long)]
    pub show_text: bool,
}

/// Arguments for the search command.
#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// PDF file to search
    pub file: PathBuf,

    /// Term to look for (case-insensitive, literal)
    pub term: String,

    /// Characters of context on each side of a hit
    #[arg(short = 'C', long)]
    pub context: Option<usize>,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the configuration in effect
    Show,

    /// Print the configuration file path
    Path,

    /// Overwrite the configuration file with defaults
    Reset,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_audit_command() {
        let cli = Cli::parse_from(["audita", "audit", "historia.pdf", "--show-text"]);
        match cli.command {
            Command::Audit(args) => {
                assert_eq!(args.file, PathBuf::from("historia.pdf"));
                assert!(args.show_text);
            }
            _ => panic!("Expected Audit command"),
        }
    }

    #[test]
    fn test_search_command_with_globals() {
        let cli = Cli::parse_from([
            "audita", "search", "historia.pdf", "angina", "-C", "20", "--format", "json", "-vv",
        ]);
        assert_eq!(cli.format, Some(CliFormat::Json));
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Search(args) => {
                assert_eq!(args.term, "angina");
                assert_eq!(args.context, Some(20));
            }
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_config_command() {
        let cli = Cli::parse_from(["audita", "config", "reset", "--config", "/tmp/audita.toml"]);
        assert!(matches!(
            cli.command,
            Command::Config(ConfigArgs { action: ConfigAction::Reset })
        ));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/audita.toml")));
    }

    #[test]
    fn test_missing_subcommand_is_an_error() {
        assert!(Cli::try_parse_from(["audita"]).is_err());
    }

    #[test]
    fn test_format_conversion() {
        let format: OutputFormat = CliFormat::Quiet.into();
        assert_eq!(format, OutputFormat::Quiet);
    }
}
