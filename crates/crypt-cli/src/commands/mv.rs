//! Move command
//!
//! Usage: crypt mv <OLD> <NEW>

use clap::Args;
use crypt_engine::{pump_renames, QueuedRenameSource};
use std::path::PathBuf;

use super::{absolute_path, open_session, CliResult, GlobalArgs};

#[derive(Debug, Args)]
pub struct MvArgs {
    /// Current location of the file
    pub old: PathBuf,

    /// New location of the file
    pub new: PathBuf,
}

/// Execute mv
///
/// Renames the file first, then feeds the rename to the engine the same way
/// an editor's file watcher would.
pub fn execute(global: &GlobalArgs, args: MvArgs) -> CliResult {
    if args.new.exists() {
        return Err(format!("{} already exists", args.new.display()).into());
    }

    let old_path = absolute_path(&args.old)?;
    let mut ctx = open_session(global)?;

    std::fs::rename(&args.old, &args.new)?;
    let new_path = absolute_path(&args.new)?;

    let mut renames = QueuedRenameSource::new();
    renames.push(old_path, new_path.clone());
    let moved = pump_renames(&mut ctx, &mut renames)?;

    println!("Moved to {} ({} buried snippet(s) followed)", new_path, moved);
    Ok(())
}
