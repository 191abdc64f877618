//! Marker derivation for buried snippets
//!
//! A marker is the derived, never-persisted annotation an editor shows at a
//! snippet's recorded line while the source document is open: a gutter icon,
//! a ghost-text preview after the line, and a hover with the full code.
//!
//! Everything here is a pure function of its inputs. It runs on every
//! keystroke in the active document, so the same inputs must produce
//! byte-identical markers, and the snippets are only ever borrowed.

use crypt_core_types::SnippetId;

use crate::model::Snippet;

/// Default character budget for the ghost-text preview
pub const DEFAULT_PREVIEW_BUDGET: usize = 30;

/// Command the hover link triggers in the host
pub const RESURRECT_AT_CURSOR_COMMAND: &str = "crypt.resurrectCurrent";

const ELLIPSIS: &str = "...";

/// The document markers are computed for
#[derive(Debug, Clone, Copy)]
pub struct DocumentView<'a> {
    pub path: &'a str,
    pub line_count: usize,
    pub language_id: Option<&'a str>,
}

/// One visual annotation for one buried snippet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub snippet_id: SnippetId,
    /// Zero-based line the marker is drawn on, always inside the document
    pub line: usize,
    /// Short label: truncated first line, prefixed with the reason if any
    pub preview: String,
    /// Markdown shown on hover
    pub hover: String,
}

impl Marker {
    /// Inline text rendered after the marked line
    pub fn ghost_text(&self) -> String {
        format!("  👻 {} (Buried)", self.preview)
    }
}

/// Compute markers for every snippet buried in `doc`
///
/// Snippets from other files are skipped. Output follows the order of
/// `snippets`.
pub fn compute_markers(
    doc: &DocumentView<'_>,
    snippets: &[Snippet],
    preview_budget: usize,
) -> Vec<Marker> {
    snippets
        .iter()
        .filter(|s| s.belongs_to(doc.path))
        .map(|s| Marker {
            snippet_id: s.id.clone(),
            line: marker_line(s.line, doc.line_count),
            preview: preview_label(s, preview_budget),
            hover: hover_markdown(s, doc.language_id),
        })
        .collect()
}

/// Clamp a stored line onto an existing line of the document
pub fn marker_line(line: usize, line_count: usize) -> usize {
    line.min(line_count.saturating_sub(1))
}

/// Truncated first line of the code
///
/// The first line is trimmed and cut to `budget` characters. An ellipsis is
/// appended when the code spans several lines or the untrimmed first line is
/// longer than the budget.
pub fn preview_text(snippet: &Snippet, budget: usize) -> String {
    let first_line = snippet.code.split('\n').next().unwrap_or_default();
    let mut preview: String = first_line.trim().chars().take(budget).collect();

    if snippet.line_span() > 1 || first_line.chars().count() > budget {
        preview.push_str(ELLIPSIS);
    }
    preview
}

/// Preview with the burial reason folded in
pub fn preview_label(snippet: &Snippet, budget: usize) -> String {
    let preview = preview_text(snippet, budget);
    match &snippet.reason {
        Some(reason) => format!("[{} {}]", reason, preview),
        None => preview,
    }
}

/// Hover content: the full code in a fenced block plus a resurrect link
pub fn hover_markdown(snippet: &Snippet, language_id: Option<&str>) -> String {
    let fence = "`".repeat(longest_backtick_run(&snippet.code).max(2) + 1);
    let mut hover = String::new();

    hover.push_str(&fence);
    hover.push_str(language_id.unwrap_or_default());
    hover.push('\n');
    hover.push_str(&snippet.code);
    if !snippet.code.ends_with('\n') {
        hover.push('\n');
    }
    hover.push_str(&fence);
    hover.push_str("\n\n---\n\n");
    hover.push_str(&format!(
        "[⚡ **Click here to Resurrect**](command:{})",
        RESURRECT_AT_CURSOR_COMMAND
    ));
    hover
}

fn longest_backtick_run(text: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for c in text.chars() {
        if c == '`' {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}
