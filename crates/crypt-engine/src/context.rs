//! Session context
//!
//! `CryptContext` is created once per workspace session and owns everything
//! the session needs: the snippet store, the configuration and the
//! decoration synchronizer. Adapters hold it for the session's lifetime and
//! call [`CryptContext::shutdown`] to release it.
//!
//! ## Logging Ownership
//!
//! The context owns lifecycle logging for mutating operations:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Lower layers (store, core) use only `tracing::debug!()` for internal details.

use std::path::Path;
use std::time::Instant;

use crypt_core::ops::snippet_ops;
use crypt_core::{
    log_op_end, log_op_error, log_op_start, sidebar_entries, CryptError, DocumentReader, ExError,
    Marker, SidebarEntry, Snippet, SnippetId, SnippetStore,
};
use crypt_store::JsonFileStore;

use crate::config::CryptConfig;
use crate::sync::{DecorationSynchronizer, SyncTrigger};
use crate::Result;

/// One workspace session
#[derive(Debug)]
pub struct CryptContext<S: SnippetStore> {
    store: S,
    config: CryptConfig,
    sync: DecorationSynchronizer,
}

impl CryptContext<JsonFileStore> {
    /// Open the file-backed store for `workspace_root` and start a session
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if an existing store cannot be read.
    pub fn open_workspace(
        data_dir: &Path,
        workspace_root: &Path,
        config: CryptConfig,
    ) -> Result<Self> {
        let store = JsonFileStore::for_workspace(data_dir, workspace_root)
            .map_err(|e| at_boundary(e, "open_workspace"))?;
        tracing::debug!(path = %store.path().display(), "workspace store opened");
        Ok(Self::new(store, config))
    }
}

impl<S: SnippetStore> CryptContext<S> {
    pub fn new(store: S, config: CryptConfig) -> Self {
        let sync = DecorationSynchronizer::new(config.preview_budget);
        Self {
            store,
            config,
            sync,
        }
    }

    pub fn config(&self) -> &CryptConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn synchronizer(&self) -> &DecorationSynchronizer {
        &self.sync
    }

    /// End the session and hand the store back
    pub fn shutdown(self) -> S {
        tracing::debug!(count = self.store.snippets().len(), "session shut down");
        self.store
    }

    /// Bury a code fragment
    ///
    /// The adapter clears the range from its buffer only after this returns
    /// `Ok`.
    ///
    /// # Errors
    ///
    /// - `EmptyContent`: `code` is empty or whitespace-only
    /// - `Persistence`: the store write failed; nothing was stored
    pub fn bury(
        &mut self,
        file_path: &str,
        line: usize,
        code: &str,
        reason: Option<String>,
    ) -> Result<Snippet> {
        log_op_start!("bury", file_path = file_path, line = line);
        let start = Instant::now();

        let snippet = snippet_ops::bury(&mut self.store, file_path, line, code, reason)
            .map_err(|e| {
                let ex = at_boundary(e, "bury").with_file_path(file_path);
                log_op_error!(
                    "bury",
                    ex.clone(),
                    duration_ms = start.elapsed().as_millis() as u64
                );
                ex
            })?;

        self.sync.notify(SyncTrigger::SnippetsChanged(&[file_path]));

        log_op_end!(
            "bury",
            duration_ms = start.elapsed().as_millis() as u64,
            snippet_id = %snippet.id
        );

        Ok(snippet)
    }

    /// Remove a snippet from storage and return it
    ///
    /// Store side only; use [`crate::restore`] to put the code back into a
    /// document.
    ///
    /// # Errors
    ///
    /// - `NotFound`: no snippet has this id
    /// - `Persistence`: the store write failed; the snippet stays stored
    pub fn resurrect(&mut self, id: &SnippetId) -> Result<Snippet> {
        log_op_start!("resurrect", snippet_id = %id);
        let start = Instant::now();

        let snippet = snippet_ops::resurrect(&mut self.store, id).map_err(|e| {
            let ex = at_boundary(e, "resurrect").with_snippet_id(id.clone());
            log_op_error!(
                "resurrect",
                ex.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            ex
        })?;

        self.sync
            .notify(SyncTrigger::SnippetsChanged(&[snippet.file_path.as_str()]));

        log_op_end!(
            "resurrect",
            duration_ms = start.elapsed().as_millis() as u64,
            snippet_id = %id
        );

        Ok(snippet)
    }

    /// Delete a snippet; unknown ids are a no-op
    ///
    /// Returns whether anything was removed.
    ///
    /// # Errors
    ///
    /// - `Persistence`: the store write failed
    pub fn delete(&mut self, id: &SnippetId) -> Result<bool> {
        log_op_start!("delete", snippet_id = %id);
        let start = Instant::now();

        let file_path = snippet_ops::get(&self.store, id).map(|s| s.file_path);

        let removed = snippet_ops::delete(&mut self.store, id).map_err(|e| {
            let ex = at_boundary(e, "delete").with_snippet_id(id.clone());
            log_op_error!(
                "delete",
                ex.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            ex
        })?;

        if let Some(path) = file_path.as_deref() {
            self.sync.notify(SyncTrigger::SnippetsChanged(&[path]));
        }

        log_op_end!(
            "delete",
            duration_ms = start.elapsed().as_millis() as u64,
            removed = removed
        );

        Ok(removed)
    }

    /// Follow a file rename
    ///
    /// Returns how many snippets moved to `new_path`.
    ///
    /// # Errors
    ///
    /// - `InvalidInput`: either path is empty
    /// - `Persistence`: the store write failed; nothing moved
    pub fn reconcile_rename(&mut self, old_path: &str, new_path: &str) -> Result<usize> {
        log_op_start!("reconcile_rename", old_path = old_path, new_path = new_path);
        let start = Instant::now();

        let changed = snippet_ops::reconcile_rename(&mut self.store, old_path, new_path)
            .map_err(|e| {
                let ex = at_boundary(e, "reconcile_rename").with_file_path(old_path);
                log_op_error!(
                    "reconcile_rename",
                    ex.clone(),
                    duration_ms = start.elapsed().as_millis() as u64
                );
                ex
            })?;

        if changed > 0 {
            self.sync
                .notify(SyncTrigger::SnippetsChanged(&[old_path, new_path]));
        }

        log_op_end!(
            "reconcile_rename",
            duration_ms = start.elapsed().as_millis() as u64,
            changed_count = changed
        );

        Ok(changed)
    }

    /// Record the running application version
    ///
    /// Returns `true` the first time a given version is seen, so the adapter
    /// can show an "updated" notice once.
    ///
    /// # Errors
    ///
    /// - `Persistence`: the new version could not be stored
    pub fn note_version(&mut self, current: &str) -> Result<bool> {
        if current.is_empty() || self.store.last_seen_version() == Some(current) {
            return Ok(false);
        }

        log_op_start!("note_version", version = current);
        let start = Instant::now();

        self.store.set_last_seen_version(current).map_err(|e| {
            let ex = at_boundary(e, "note_version");
            log_op_error!(
                "note_version",
                ex.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            ex
        })?;

        log_op_end!(
            "note_version",
            duration_ms = start.elapsed().as_millis() as u64
        );

        Ok(true)
    }

    pub fn get(&self, id: &SnippetId) -> Option<Snippet> {
        snippet_ops::get(&self.store, id)
    }

    /// First snippet buried at `(file_path, line)`; earliest burial wins
    pub fn find_at(&self, file_path: &str, line: usize) -> Option<Snippet> {
        snippet_ops::find_at(&self.store, file_path, line)
    }

    pub fn list(&self) -> Vec<Snippet> {
        snippet_ops::list(&self.store)
    }

    pub fn snippets_for_file(&self, file_path: &str) -> Vec<Snippet> {
        snippet_ops::snippets_for_file(&self.store, file_path)
    }

    /// Sidebar rows, newest first
    pub fn sidebar(&self) -> Vec<SidebarEntry> {
        sidebar_entries(self.store.snippets(), self.config.tooltip_budget)
    }

    /// Markers for the document at `file_path`
    pub fn compute_markers(&self, file_path: &str, reader: &dyn DocumentReader) -> Vec<Marker> {
        self.sync.markers_for(file_path, self.store.snippets(), reader)
    }

    /// Feed an editor event to the synchronizer
    ///
    /// Returns the active document's markers when they must be repainted.
    pub fn on_event(
        &mut self,
        trigger: SyncTrigger<'_>,
        reader: &dyn DocumentReader,
    ) -> Option<Vec<Marker>> {
        self.sync.notify(trigger);
        self.take_repaint(reader)
    }

    /// Collect a repaint owed by an earlier mutation, if any
    pub fn take_repaint(&mut self, reader: &dyn DocumentReader) -> Option<Vec<Marker>> {
        self.sync.take_repaint(self.store.snippets(), reader)
    }
}

/// Convert a domain error for the engine boundary
///
/// Keeps the operation recorded by the lower layer (e.g. the store step that
/// failed) and falls back to `op` otherwise.
pub(crate) fn at_boundary(err: CryptError, op: &str) -> ExError {
    let ex = ExError::from(err);
    if ex.op().is_some() {
        ex
    } else {
        ex.with_op(op)
    }
}
