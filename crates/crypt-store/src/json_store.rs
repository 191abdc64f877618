//! JSON file store
//!
//! Keeps the whole collection in memory and rewrites the file on every
//! mutation. The next state is persisted first and only swapped in after the
//! write succeeded, so a failed write leaves both disk and memory unchanged.

use crate::atomic::atomic_write;
use crate::errors::{io_error, Result};
use crate::format::{self, StoreFileV1};
use crate::scope;
use crypt_core::{Snippet, SnippetStore};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File-backed snippet store
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    state: StoreFileV1,
}

impl JsonFileStore {
    /// Open the store at `path`
    ///
    /// A missing file is an empty store; nothing is written until the first
    /// mutation. Legacy un-versioned files are migrated in memory.
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if the file exists but cannot be read or decoded.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let state = match fs::read(&path) {
            Ok(bytes) => format::decode(&bytes)?,
            Err(e) if e.kind() == ErrorKind::NotFound => StoreFileV1::default(),
            Err(e) => return Err(io_error("open_store", e)),
        };

        tracing::debug!(
            path = %path.display(),
            count = state.snippets.len(),
            "opened snippet store"
        );

        Ok(Self { path, state })
    }

    /// Open the store scoped to `workspace_root` under `data_dir`
    ///
    /// # Errors
    ///
    /// Same as [`JsonFileStore::open`].
    pub fn for_workspace(data_dir: &Path, workspace_root: &Path) -> Result<Self> {
        Self::open(scope::store_file(data_dir, workspace_root))
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn commit(&mut self, next: StoreFileV1) -> Result<()> {
        let bytes = format::encode(&next)?;
        atomic_write(&self.path, &bytes)?;
        self.state = next;
        Ok(())
    }
}

impl SnippetStore for JsonFileStore {
    fn snippets(&self) -> &[Snippet] {
        &self.state.snippets
    }

    fn replace(&mut self, snippets: Vec<Snippet>) -> Result<()> {
        let next = StoreFileV1 {
            schema_version: format::SCHEMA_VERSION,
            last_seen_version: self.state.last_seen_version.clone(),
            snippets,
        };
        self.commit(next)
    }

    fn last_seen_version(&self) -> Option<&str> {
        self.state.last_seen_version.as_deref()
    }

    fn set_last_seen_version(&mut self, version: &str) -> Result<()> {
        let next = StoreFileV1 {
            last_seen_version: Some(version.to_string()),
            ..self.state.clone()
        };
        self.commit(next)
    }
}
