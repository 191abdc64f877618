//! Restore command with boundary logging.
//!
//! Puts buried code back into a document. Insertion always happens first;
//! the snippet leaves the store only once the host accepted the edit, so a
//! failed insertion never loses code.

use std::time::Instant;

use crypt_core::decorations::marker_line;
use crypt_core::ops::restore::restore_text;
use crypt_core::{
    log_op_end, log_op_error, log_op_start, resolve_restore_target, CryptError, DocumentReader,
    DocumentWriter, ExError, ExErrorKind, SnippetId, SnippetStore,
};

use crate::context::{at_boundary, CryptContext};
use crate::Result;

/// Where restored code ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// Inserted into the original file at `line` (zero-based)
    Restored { file_path: String, line: usize },
    /// Original file was gone; the code went into a new untitled document
    Materialized { document: String },
}

/// Restore a snippet by id
///
/// ## Errors
///
/// - `NotFound`: no snippet has this id
/// - `FileUnavailable`: the original file is gone and the untitled fallback
///   is disabled; the snippet stays stored
/// - `Io`: the original file exists but cannot be read; the snippet stays
///   stored
/// - `Persistence`: the store write failed after insertion
/// - Any error the host reports while editing; the snippet stays stored
pub fn restore<S, H>(
    ctx: &mut CryptContext<S>,
    id: &SnippetId,
    host: &mut H,
) -> Result<RestoreOutcome>
where
    S: SnippetStore,
    H: DocumentReader + DocumentWriter + ?Sized,
{
    log_op_start!("restore", snippet_id = %id);
    let start = Instant::now();

    let outcome = restore_impl(ctx, id, host).map_err(|e| {
        log_op_error!(
            "restore",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "restore",
        duration_ms = start.elapsed().as_millis() as u64,
        snippet_id = %id,
        outcome = ?outcome
    );

    Ok(outcome)
}

/// Restore whatever is buried at `(file_path, line)`
///
/// Backs the hover's resurrect link: the editor passes the cursor line.
/// An exact match on the stored line wins. Otherwise the earliest snippet
/// whose marker is drawn on `line` (stored past the end of a shrunk
/// document and clamped onto its last line) is restored.
///
/// ## Errors
///
/// - `NotFound`: nothing is buried on that line
/// - Everything [`restore`] can return
pub fn restore_at_cursor<S, H>(
    ctx: &mut CryptContext<S>,
    file_path: &str,
    line: usize,
    host: &mut H,
) -> Result<RestoreOutcome>
where
    S: SnippetStore,
    H: DocumentReader + DocumentWriter + ?Sized,
{
    let snippet = ctx
        .find_at(file_path, line)
        .or_else(|| {
            let line_count = host.line_count(file_path)?;
            ctx.snippets_for_file(file_path)
                .into_iter()
                .find(|s| marker_line(s.line, line_count) == line)
        })
        .ok_or_else(|| {
            ExError::new(ExErrorKind::NotFound)
                .with_op("restore_at_cursor")
                .with_file_path(file_path)
                .with_message(format!("No buried code at line {}", line + 1))
        })?;

    restore(ctx, &snippet.id, host)
}

fn restore_impl<S, H>(
    ctx: &mut CryptContext<S>,
    id: &SnippetId,
    host: &mut H,
) -> Result<RestoreOutcome>
where
    S: SnippetStore,
    H: DocumentReader + DocumentWriter + ?Sized,
{
    let snippet = ctx.get(id).ok_or_else(|| {
        at_boundary(
            CryptError::SnippetNotFound {
                snippet_id: id.clone(),
            },
            "restore",
        )
    })?;

    let line_count = if host.exists(&snippet.file_path) {
        let count = host.line_count(&snippet.file_path).ok_or_else(|| {
            ExError::new(ExErrorKind::Io)
                .with_op("restore")
                .with_snippet_id(id.clone())
                .with_file_path(snippet.file_path.clone())
                .with_message("Original file exists but could not be read")
        })?;
        Some(count)
    } else {
        None
    };

    let outcome = match line_count {
        Some(line_count) => {
            let line = resolve_restore_target(&snippet, line_count);
            host.insert_at_line(&snippet.file_path, line, &restore_text(&snippet))
                .map_err(|e| at_boundary(e, "restore").with_snippet_id(id.clone()))?;
            RestoreOutcome::Restored {
                file_path: snippet.file_path.clone(),
                line,
            }
        }
        None if ctx.config().fallback_to_untitled => {
            let language_id = host.language_id(&snippet.file_path);
            let document = host
                .open_untitled(&snippet.file_name, &snippet.code, language_id.as_deref())
                .map_err(|e| at_boundary(e, "restore").with_snippet_id(id.clone()))?;
            tracing::debug!(
                snippet_id = %id,
                document = %document,
                "original file gone, materialized into untitled document"
            );
            RestoreOutcome::Materialized { document }
        }
        None => {
            return Err(at_boundary(
                CryptError::FileUnavailable {
                    file_path: snippet.file_path.clone(),
                },
                "restore",
            )
            .with_snippet_id(id.clone()));
        }
    };

    ctx.resurrect(id)?;
    Ok(outcome)
}
