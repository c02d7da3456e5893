//! Checklist command implementation.

use crate::error::Result;
use crate::output::Formatter;
use audita_extractor::DEFAULT_CHECKLIST;

/// Execute the checklist command.
pub fn execute_checklist(formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_checklist(&DEFAULT_CHECKLIST)?);
    Ok(())
}
