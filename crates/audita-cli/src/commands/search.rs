//! Search command implementation.

use super::audit_file;
use crate::cli::SearchArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use audita_extractor::search_pages;

/// Execute the search command.
pub fn execute_search(args: SearchArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    if args.term.trim().is_empty() {
        return Err(CliError::InvalidInput("Search term must not be empty".to_string()));
    }

    let report = audit_file(&args.file, &config.audit)?;
    let context = args.context.unwrap_or(config.audit.snippet_chars);
    let hits = search_pages(&report.pages, &args.term, context);

    println!("{}", formatter.format_hits(&hits, &args.term)?);
    Ok(())
}
