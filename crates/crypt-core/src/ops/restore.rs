use crate::model::Snippet;

/// Pick the line a snippet should be restored at
///
/// The stored line is only a hint about the document as it was at burial
/// time. If the document has since shrunk below it, restore at the end
/// instead (`document_line_count`, i.e. append). Never fails and never
/// returns an index past `document_line_count`.
pub fn resolve_restore_target(snippet: &Snippet, document_line_count: usize) -> usize {
    if snippet.line < document_line_count {
        snippet.line
    } else {
        document_line_count
    }
}

/// Text to insert when restoring, terminated so following lines stay put
pub fn restore_text(snippet: &Snippet) -> String {
    if snippet.code.ends_with('\n') {
        snippet.code.clone()
    } else {
        format!("{}\n", snippet.code)
    }
}
