//! Markers command
//!
//! Usage: crypt markers <FILE> [--hover]

use clap::Args;
use crypt_engine::SyncTrigger;
use std::path::PathBuf;

use super::{absolute_path, open_session, CliResult, GlobalArgs};

#[derive(Debug, Args)]
pub struct MarkersArgs {
    /// File to decorate
    pub file: PathBuf,

    /// Also print the hover content of each marker
    #[arg(long)]
    pub hover: bool,
}

/// Execute markers
pub fn execute(global: &GlobalArgs, args: MarkersArgs) -> CliResult {
    let file_path = absolute_path(&args.file)?;
    let mut ctx = open_session(global)?;
    let host = global.host();

    let markers = ctx
        .on_event(SyncTrigger::ActiveDocumentChanged(Some(file_path.as_str())), &host)
        .unwrap_or_default();

    if markers.is_empty() {
        println!("No buried code in {}", file_path);
        return Ok(());
    }

    for marker in markers {
        println!("{:>5} |{}", marker.line + 1, marker.ghost_text());
        if args.hover {
            for line in marker.hover.lines() {
                println!("      | {}", line);
            }
        }
    }
    Ok(())
}
