//! Sidebar rows for the buried-snippet list

use crypt_core_types::SnippetId;

use crate::model::Snippet;

/// Default tooltip length in characters
pub const DEFAULT_TOOLTIP_BUDGET: usize = 100;

/// One row of the sidebar list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntry {
    pub snippet_id: SnippetId,
    /// File name the snippet came from
    pub label: String,
    /// "Line N • HH:MM:SS", line one-based
    pub description: String,
    /// Head of the buried code
    pub tooltip: String,
}

/// Build sidebar rows, newest burial first
pub fn sidebar_entries(snippets: &[Snippet], tooltip_budget: usize) -> Vec<SidebarEntry> {
    snippets
        .iter()
        .rev()
        .map(|s| SidebarEntry {
            snippet_id: s.id.clone(),
            label: s.file_name.clone(),
            description: format!("Line {} • {}", s.line + 1, s.timestamp.format("%H:%M:%S")),
            tooltip: truncate(&s.code, tooltip_budget),
        })
        .collect()
}

fn truncate(text: &str, budget: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(budget).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}
