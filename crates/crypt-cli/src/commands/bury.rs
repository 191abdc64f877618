//! Bury command
//!
//! Usage: crypt bury <FILE> --start <LINE> [--end <LINE>] [--reason <TEXT>]

use clap::Args;
use crypt_core::CryptError;
use crypt_store::atomic::atomic_write;
use std::path::{Path, PathBuf};

use super::{absolute_path, line_index, open_session, CliResult, GlobalArgs};

#[derive(Debug, Args)]
pub struct BuryArgs {
    /// File to cut the code from
    pub file: PathBuf,

    /// First line to bury (1-based)
    #[arg(long)]
    pub start: usize,

    /// Last line to bury, inclusive [default: --start]
    #[arg(long)]
    pub end: Option<usize>,

    /// Why the code is being buried
    #[arg(long)]
    pub reason: Option<String>,
}

/// Execute bury
///
/// Store-then-clear: the lines leave the file only after the snippet is
/// stored. If clearing fails the snippet is dropped again.
pub fn execute(global: &GlobalArgs, args: BuryArgs) -> CliResult {
    let file_path = absolute_path(&args.file)?;
    let content = std::fs::read_to_string(&file_path)?;
    let start = line_index(args.start)?;
    let end = line_index(args.end.unwrap_or(args.start))?;
    let (code, remaining) = cut_lines(&content, start, end)?;

    let mut ctx = open_session(global)?;
    let snippet = ctx.bury(&file_path, start, &code, args.reason)?;

    if let Err(e) = atomic_write(Path::new(&file_path), remaining.as_bytes()) {
        if let Err(rollback) = ctx.delete(&snippet.id) {
            tracing::warn!(error = %rollback, snippet_id = %snippet.id, "rollback failed");
        }
        return Err(e.into());
    }

    println!(
        "⚰️  Buried {} line(s) from {}:{} as {}",
        end - start + 1,
        snippet.file_name,
        args.start,
        snippet.id
    );
    Ok(())
}

/// Split `content` into the zero-based inclusive line range and the rest
///
/// Lines are separated by `\n`; removed lines take their terminator with
/// them so the following lines move up.
fn cut_lines(content: &str, start: usize, end: usize) -> Result<(String, String), CryptError> {
    let lines: Vec<&str> = content.split('\n').collect();
    if start > end || end >= lines.len() {
        return Err(CryptError::InvalidInput {
            reason: format!(
                "line range {}..={} is outside the file ({} lines)",
                start + 1,
                end + 1,
                lines.len()
            ),
        });
    }

    let code = lines[start..=end].join("\n");
    let remaining: Vec<&str> = lines[..start]
        .iter()
        .chain(lines[end + 1..].iter())
        .copied()
        .collect();

    Ok((code, remaining.join("\n")))
}
