use crypt_core_types::SnippetId;

use super::store::SnippetStore;
use crate::errors::{CryptError, Result};
use crate::model::Snippet;

/// Bury a code fragment
///
/// Builds a new Snippet with a fresh id and the current timestamp, appends it
/// to the stored collection and returns it. Removing the fragment from the
/// live buffer is the caller's job and must only happen after this returns
/// `Ok` (store-then-clear).
///
/// # Arguments
/// * `store` - Snippet store to append to
/// * `file_path` - Absolute path of the file the code is cut from
/// * `line` - Zero-based line where the selection starts
/// * `code` - Exact selected text
/// * `reason` - Optional note; blank notes are dropped
///
/// # Errors
/// * `EmptyContent` - If `code` is empty or whitespace-only (nothing stored)
/// * `Persistence` - If the store write fails (nothing stored)
pub fn bury<S: SnippetStore + ?Sized>(
    store: &mut S,
    file_path: &str,
    line: usize,
    code: &str,
    reason: Option<String>,
) -> Result<Snippet> {
    if code.trim().is_empty() {
        return Err(CryptError::EmptyContent);
    }

    let mut snippets = store.snippets().to_vec();

    let mut id = SnippetId::new();
    while snippets.iter().any(|s| s.id == id) {
        id = SnippetId::new();
    }

    let snippet = Snippet::new(id, file_path.to_string(), line, code.to_string(), reason);
    snippets.push(snippet.clone());
    store.replace(snippets)?;

    tracing::debug!(snippet_id = %snippet.id, file_path, line, "snippet buried");
    Ok(snippet)
}

/// List every stored snippet in insertion order
pub fn list<S: SnippetStore + ?Sized>(store: &S) -> Vec<Snippet> {
    store.snippets().to_vec()
}

/// Look a snippet up by id
pub fn get<S: SnippetStore + ?Sized>(store: &S, id: &SnippetId) -> Option<Snippet> {
    store.snippets().iter().find(|s| &s.id == id).cloned()
}

/// Snippets buried in `file_path`, in insertion order
pub fn snippets_for_file<S: SnippetStore + ?Sized>(store: &S, file_path: &str) -> Vec<Snippet> {
    store
        .snippets()
        .iter()
        .filter(|s| s.belongs_to(file_path))
        .cloned()
        .collect()
}

/// Find the snippet buried at an exact location
///
/// Returns the first match in insertion order, so when the same line was
/// buried more than once the earliest burial wins. Callers wanting the most
/// recent one must search [`list`] in reverse themselves.
pub fn find_at<S: SnippetStore + ?Sized>(
    store: &S,
    file_path: &str,
    line: usize,
) -> Option<Snippet> {
    store
        .snippets()
        .iter()
        .find(|s| s.belongs_to(file_path) && s.line == line)
        .cloned()
}

/// Remove a snippet from the store and hand it back
///
/// Only the store side is handled here. Callers restoring code into a buffer
/// should insert first and call this afterwards; a failed insertion after a
/// successful `resurrect` loses the snippet.
///
/// # Errors
/// * `SnippetNotFound` - If no snippet has this id
/// * `Persistence` - If the store write fails (snippet stays stored)
pub fn resurrect<S: SnippetStore + ?Sized>(store: &mut S, id: &SnippetId) -> Result<Snippet> {
    let mut snippets = store.snippets().to_vec();
    let position = snippets
        .iter()
        .position(|s| &s.id == id)
        .ok_or_else(|| CryptError::SnippetNotFound {
            snippet_id: id.clone(),
        })?;

    let snippet = snippets.remove(position);
    store.replace(snippets)?;

    tracing::debug!(snippet_id = %id, "snippet resurrected");
    Ok(snippet)
}

/// Delete a snippet
///
/// Idempotent: deleting an unknown id succeeds without touching the store.
/// Returns whether anything was removed.
///
/// # Errors
/// * `Persistence` - If the store write fails
pub fn delete<S: SnippetStore + ?Sized>(store: &mut S, id: &SnippetId) -> Result<bool> {
    let snippets = store.snippets();
    if !snippets.iter().any(|s| &s.id == id) {
        return Ok(false);
    }

    let remaining: Vec<Snippet> = snippets.iter().filter(|s| &s.id != id).cloned().collect();
    store.replace(remaining)?;

    tracing::debug!(snippet_id = %id, "snippet deleted");
    Ok(true)
}

/// Follow a file rename
///
/// Rewrites `file_path` and `file_name` of every snippet buried in
/// `old_path`. Returns how many snippets were touched; `0` means nothing
/// matched and no write was issued.
///
/// # Errors
/// * `InvalidInput` - If either path is empty
/// * `Persistence` - If the store write fails (no snippet is rewritten)
pub fn reconcile_rename<S: SnippetStore + ?Sized>(
    store: &mut S,
    old_path: &str,
    new_path: &str,
) -> Result<usize> {
    if old_path.is_empty() || new_path.is_empty() {
        return Err(CryptError::InvalidInput {
            reason: "Rename paths cannot be empty".to_string(),
        });
    }
    if old_path == new_path {
        return Ok(0);
    }

    let mut snippets = store.snippets().to_vec();
    let mut changed = 0;
    for snippet in snippets.iter_mut().filter(|s| s.belongs_to(old_path)) {
        snippet.relocate(new_path);
        changed += 1;
    }

    if changed > 0 {
        store.replace(snippets)?;
        tracing::debug!(old_path, new_path, changed, "snippets relocated");
    }
    Ok(changed)
}
