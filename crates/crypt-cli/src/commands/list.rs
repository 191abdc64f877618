//! List command
//!
//! Usage: crypt list

use super::{open_session, CliResult, GlobalArgs};

/// Execute list
pub fn execute(global: &GlobalArgs) -> CliResult {
    let ctx = open_session(global)?;
    let entries = ctx.sidebar();

    if entries.is_empty() {
        println!("The crypt is empty.");
        return Ok(());
    }

    for entry in entries {
        println!("{}  {}  {}", entry.snippet_id, entry.label, entry.description);
        let head = entry.tooltip.lines().next().unwrap_or_default();
        println!("    {}", head);
    }
    Ok(())
}
