//! Decoration synchronizer
//!
//! Tracks the active document and decides when its markers must be
//! recomputed. Marker derivation itself is pure (see
//! `crypt_core::decorations`); this type only holds the little state needed
//! to turn editor and store events into repaint requests.

use crypt_core::decorations::{compute_markers, DocumentView};
use crypt_core::{DocumentReader, Marker, Snippet};

/// Something that may invalidate the active document's markers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncTrigger<'a> {
    /// The editor switched documents (`None` when no document is active)
    ActiveDocumentChanged(Option<&'a str>),
    /// The content of a document changed
    DocumentEdited(&'a str),
    /// Snippets buried in these files were added, removed or moved
    SnippetsChanged(&'a [&'a str]),
}

/// Repaint tracker for the active document
#[derive(Debug, Clone)]
pub struct DecorationSynchronizer {
    active: Option<String>,
    preview_budget: usize,
    pending: bool,
}

impl DecorationSynchronizer {
    pub fn new(preview_budget: usize) -> Self {
        Self {
            active: None,
            preview_budget,
            pending: false,
        }
    }

    /// Path of the active document, if any
    pub fn active_document(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Whether a repaint is owed for the active document
    pub fn needs_repaint(&self) -> bool {
        self.pending
    }

    /// Record a trigger
    ///
    /// A document switch always owes a repaint (clearing the old markers
    /// counts). Edits and snippet changes only do when they touch the active
    /// document.
    pub fn notify(&mut self, trigger: SyncTrigger<'_>) {
        let concerns_active = match trigger {
            SyncTrigger::ActiveDocumentChanged(path) => {
                self.active = path.map(str::to_string);
                true
            }
            SyncTrigger::DocumentEdited(path) => self.is_active(path),
            SyncTrigger::SnippetsChanged(paths) => paths.iter().any(|p| self.is_active(p)),
        };
        self.pending |= concerns_active;
    }

    /// Hand out the owed repaint, if any
    ///
    /// Returns the full marker set of the active document (empty when no
    /// document is active or it cannot be read) and clears the pending flag.
    pub fn take_repaint(
        &mut self,
        snippets: &[Snippet],
        reader: &dyn DocumentReader,
    ) -> Option<Vec<Marker>> {
        if !self.pending {
            return None;
        }
        self.pending = false;

        let markers = match &self.active {
            Some(path) => self.markers_for(path, snippets, reader),
            None => Vec::new(),
        };
        tracing::debug!(
            active = ?self.active,
            count = markers.len(),
            "repainting decorations"
        );
        Some(markers)
    }

    /// Markers for any document, active or not
    pub fn markers_for(
        &self,
        path: &str,
        snippets: &[Snippet],
        reader: &dyn DocumentReader,
    ) -> Vec<Marker> {
        let Some(line_count) = reader.line_count(path) else {
            return Vec::new();
        };
        let language_id = reader.language_id(path);
        let view = DocumentView {
            path,
            line_count,
            language_id: language_id.as_deref(),
        };
        compute_markers(&view, snippets, self.preview_budget)
    }

    fn is_active(&self, path: &str) -> bool {
        self.active.as_deref() == Some(path)
    }
}
