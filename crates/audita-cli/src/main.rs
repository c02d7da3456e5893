//! Audita CLI - Command-line auditor for clinical-record PDFs.

use audita_cli::cli::{ConfigAction, ConfigArgs};
use audita_cli::commands;
use audita_cli::{Cli, Command, Config, Formatter};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> audita_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Load config, falling back to defaults when the file is absent.
    // A broken file must not block `config reset`.
    let config_path = Config::resolve_path(cli.config.as_deref())?;
    let config = match &cli.command {
        Command::Config(ConfigArgs { action: ConfigAction::Reset }) => {
            Config::load_from(&config_path).unwrap_or_default()
        }
        _ => Config::load_from(&config_path)?,
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Audit(args) => commands::execute_audit(args, &config, &formatter),
        Command::Search(args) => commands::execute_search(args, &config, &formatter),
        Command::Checklist => commands::execute_checklist(&formatter),
        Command::Config(args) => commands::execute_config(args, &config, &config_path, &formatter),
    }
}

/// Log to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
