//! Delete command
//!
//! Usage: crypt delete <ID>

use clap::Args;
use crypt_core::SnippetId;

use super::{open_session, CliResult, GlobalArgs};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Snippet id as shown by `crypt list`
    pub id: String,
}

/// Execute delete
pub fn execute(global: &GlobalArgs, args: DeleteArgs) -> CliResult {
    let mut ctx = open_session(global)?;

    if ctx.delete(&SnippetId::from_string(args.id.as_str()))? {
        println!("Deleted {}", args.id);
    } else {
        println!("Nothing buried under {}", args.id);
    }
    Ok(())
}
