//! Audit command implementation.

use super::audit_file;
use crate::cli::AuditArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use tracing::debug;

/// Execute the audit command.
pub fn execute_audit(args: AuditArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    debug!("Auditing {}", args.file.display());
    let report = audit_file(&args.file, &config.audit)?;

    println!("{}", formatter.format_report(&report, args.show_text)?);
    Ok(())
}
