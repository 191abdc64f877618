//! Host capabilities
//!
//! The narrow slices of a host editor the lifecycle code needs. Adapters
//! implement these over a real editor (or over plain files, see the CLI);
//! tests implement them over in-memory documents.

use crate::errors::Result;

/// Read-only access to open or on-disk documents
pub trait DocumentReader {
    /// Whether the document at `path` can still be opened
    fn exists(&self, path: &str) -> bool;

    /// Number of lines in the document, or `None` if it cannot be read
    fn line_count(&self, path: &str) -> Option<usize>;

    /// Language identifier used to tag hover code blocks, if known
    fn language_id(&self, path: &str) -> Option<String> {
        language_from_path(path)
    }
}

/// Buffer mutations needed to put buried code back
pub trait DocumentWriter {
    /// Insert `text` at the start of zero-based `line`
    ///
    /// A `line` equal to the document's line count appends at the end.
    ///
    /// # Errors
    ///
    /// Returns an error if the edit could not be applied; the caller keeps
    /// the snippet stored in that case.
    fn insert_at_line(&mut self, path: &str, line: usize, text: &str) -> Result<()>;

    /// Create a new untitled document holding `text`
    ///
    /// `name_hint` is the file name the code was buried from; hosts that
    /// need a name for the new document may derive one from it. Returns an
    /// identifier of the created document (a path or buffer name)
    /// for the adapter to show.
    ///
    /// # Errors
    ///
    /// Returns an error if no document could be created.
    fn open_untitled(
        &mut self,
        name_hint: &str,
        text: &str,
        language_id: Option<&str>,
    ) -> Result<String>;
}

/// A file moved from `old_path` to `new_path`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameEvent {
    pub old_path: String,
    pub new_path: String,
}

impl RenameEvent {
    pub fn new(old_path: impl Into<String>, new_path: impl Into<String>) -> Self {
        Self {
            old_path: old_path.into(),
            new_path: new_path.into(),
        }
    }
}

/// Source of file-system rename notifications
pub trait RenameEventSource {
    /// Take every pending event, oldest first
    fn drain(&mut self) -> Vec<RenameEvent>;
}

/// Guess a language id from the file extension
///
/// Falls back to the bare extension, which most Markdown renderers accept as
/// a code-fence info string anyway.
pub fn language_from_path(path: &str) -> Option<String> {
    let name = crate::model::file_name_of(path);
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }

    let id = match ext.to_ascii_lowercase().as_str() {
        "rs" => "rust",
        "ts" | "mts" | "cts" => "typescript",
        "tsx" => "typescriptreact",
        "js" | "mjs" | "cjs" => "javascript",
        "jsx" => "javascriptreact",
        "py" => "python",
        "rb" => "ruby",
        "go" => "go",
        "md" => "markdown",
        "sh" | "bash" => "shellscript",
        "yml" | "yaml" => "yaml",
        other => return Some(other.to_string()),
    };
    Some(id.to_string())
}
