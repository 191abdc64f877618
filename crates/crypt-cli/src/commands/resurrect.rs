//! Resurrect commands
//!
//! Usage: crypt resurrect <ID>
//!        crypt resurrect-at <FILE> <LINE>

use clap::Args;
use crypt_core::SnippetId;
use crypt_engine::{restore, restore_at_cursor, RestoreOutcome};
use std::path::PathBuf;

use super::{absolute_path, line_index, open_session, CliResult, GlobalArgs};

#[derive(Debug, Args)]
pub struct ResurrectArgs {
    /// Snippet id as shown by `crypt list`
    pub id: String,
}

#[derive(Debug, Args)]
pub struct ResurrectAtArgs {
    /// File the code was buried from
    pub file: PathBuf,

    /// Line the snippet is recorded at (1-based)
    pub line: usize,
}

/// Execute resurrect by id
pub fn execute(global: &GlobalArgs, args: ResurrectArgs) -> CliResult {
    let mut ctx = open_session(global)?;
    let mut host = global.host();

    let outcome = restore(&mut ctx, &SnippetId::from_string(args.id), &mut host)?;
    report(&outcome);
    Ok(())
}

/// Execute resurrect at a file line
pub fn execute_at(global: &GlobalArgs, args: ResurrectAtArgs) -> CliResult {
    let file_path = absolute_path(&args.file)?;
    let line = line_index(args.line)?;
    let mut ctx = open_session(global)?;
    let mut host = global.host();

    let outcome = restore_at_cursor(&mut ctx, &file_path, line, &mut host)?;
    report(&outcome);
    Ok(())
}

fn report(outcome: &RestoreOutcome) {
    match outcome {
        RestoreOutcome::Restored { file_path, line } => {
            println!("⚡ Resurrected into {}:{}", file_path, line + 1);
        }
        RestoreOutcome::Materialized { document } => {
            println!("⚡ Original file is gone; code written to {}", document);
        }
    }
}
