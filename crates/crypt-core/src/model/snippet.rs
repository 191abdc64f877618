use chrono::{DateTime, SubsecRound, Utc};
use crypt_core_types::SnippetId;
use serde::{Deserialize, Serialize};

/// Display name used when a path has no usable last segment
pub const UNKNOWN_FILE_NAME: &str = "Unknown File";

/// Snippet - a buried code fragment and where it came from
///
/// The only persisted entity. Created once by bury, destroyed once by
/// resurrect or delete. The only mutation in between is the path rewrite
/// performed by rename reconciliation, which goes through [`Snippet::relocate`]
/// so `file_path` and `file_name` never disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    /// Unique identifier, never reused
    pub id: SnippetId,

    /// Exact text removed from the buffer, internal newlines included
    pub code: String,

    /// Absolute path of the originating file
    pub file_path: String,

    /// Last segment of `file_path`
    pub file_name: String,

    /// Zero-based line where the fragment started at burial time
    pub line: usize,

    /// Burial instant, persisted as epoch milliseconds
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,

    /// Optional note on why the code was buried
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Snippet {
    /// Create a new Snippet stamped with the current time
    ///
    /// `file_name` is derived from `file_path`; a blank `reason` is dropped.
    pub fn new(
        id: SnippetId,
        file_path: String,
        line: usize,
        code: String,
        reason: Option<String>,
    ) -> Self {
        let file_name = file_name_of(&file_path);
        Self {
            id,
            code,
            file_path,
            file_name,
            line,
            // Millisecond precision, same as the persisted form
            timestamp: Utc::now().trunc_subsecs(3),
            reason: normalize_reason(reason),
        }
    }

    /// Check whether this snippet was buried in `path`
    pub fn belongs_to(&self, path: &str) -> bool {
        self.file_path == path
    }

    /// Point this snippet at a new file, keeping `file_name` in sync
    pub fn relocate(&mut self, new_path: &str) {
        self.file_path = new_path.to_string();
        self.file_name = file_name_of(new_path);
    }

    /// Number of lines the buried code spans
    pub fn line_span(&self) -> usize {
        self.code.split('\n').count()
    }
}

/// Derive a display name from a path, accepting both separator styles
pub fn file_name_of(path: &str) -> String {
    path.rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .filter(|segment| !segment.is_empty())
        .unwrap_or(UNKNOWN_FILE_NAME)
        .to_string()
}

fn normalize_reason(reason: Option<String>) -> Option<String> {
    reason
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty())
}
