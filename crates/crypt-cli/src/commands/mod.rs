//! Subcommands and the plumbing they share

pub mod bury;
pub mod delete;
pub mod list;
pub mod markers;
pub mod mv;
pub mod resurrect;

use clap::Args;
use crypt_core::decorations::DEFAULT_PREVIEW_BUDGET;
use crypt_core::CryptError;
use crypt_engine::{CryptConfig, CryptContext};
use crypt_store::JsonFileStore;
use std::path::{Path, PathBuf};

use crate::host::FsDocumentHost;

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Options accepted by every subcommand
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Directory holding Crypt's data
    #[arg(long, global = true, default_value = ".crypt")]
    pub data_dir: PathBuf,

    /// Workspace root the snippets belong to [default: current directory]
    #[arg(long, global = true)]
    pub workspace: Option<PathBuf>,

    /// Where code from deleted files is written back [default: the data directory]
    #[arg(long, global = true)]
    pub fallback_dir: Option<PathBuf>,

    /// Fail instead of using the fallback directory when the original file is gone
    #[arg(long, global = true)]
    pub no_fallback: bool,

    /// Characters of code shown in marker previews
    #[arg(long, global = true, default_value_t = DEFAULT_PREVIEW_BUDGET)]
    pub preview_budget: usize,

    /// Human-readable debug logs on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON logs on stderr
    #[arg(long, global = true)]
    pub log_json: bool,
}

impl GlobalArgs {
    pub fn config(&self) -> CryptConfig {
        CryptConfig {
            preview_budget: self.preview_budget,
            fallback_to_untitled: !self.no_fallback,
            ..CryptConfig::default()
        }
    }

    pub fn host(&self) -> FsDocumentHost {
        let dir = self
            .fallback_dir
            .clone()
            .unwrap_or_else(|| self.data_dir.clone());
        FsDocumentHost::new(dir)
    }
}

/// Open the workspace session and print the update notice if due
pub fn open_session(
    global: &GlobalArgs,
) -> Result<CryptContext<JsonFileStore>, Box<dyn std::error::Error>> {
    let workspace = match &global.workspace {
        Some(path) => path.clone(),
        None => std::env::current_dir()?,
    };

    let mut ctx = CryptContext::open_workspace(&global.data_dir, &workspace, global.config())?;

    let version = env!("CARGO_PKG_VERSION");
    match ctx.note_version(version) {
        Ok(true) => eprintln!("Crypt updated to v{}! 👻", version),
        Ok(false) => {}
        Err(e) => tracing::warn!(error = %e, "could not record version"),
    }

    Ok(ctx)
}

/// Canonical absolute form of a file argument, as stored in snippets
pub fn absolute_path(path: &Path) -> std::io::Result<String> {
    Ok(std::fs::canonicalize(path)?.to_string_lossy().into_owned())
}

/// Convert a 1-based line argument to a zero-based index
pub fn line_index(line: usize) -> Result<usize, CryptError> {
    line.checked_sub(1).ok_or_else(|| CryptError::InvalidInput {
        reason: "line numbers start at 1".to_string(),
    })
}
