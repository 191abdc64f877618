use crypt_core_types::SnippetId;
use thiserror::Error;

/// Result type alias using CryptError
pub type Result<T> = std::result::Result<T, CryptError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that adapters can match on and show
/// to the user without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidInput,
    EmptyContent,

    // Lookup
    NotFound,

    // Restore
    FileUnavailable,

    // Integration/IO
    Io,
    Serialization,
    Persistence,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::EmptyContent => "ERR_EMPTY_CONTENT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::FileUnavailable => "ERR_FILE_UNAVAILABLE",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Classification plus context for one failed operation.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    snippet_id: Option<SnippetId>,
    file_path: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            snippet_id: None,
            file_path: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add snippet ID context
    pub fn with_snippet_id(mut self, id: SnippetId) -> Self {
        self.snippet_id = Some(id);
        self
    }

    /// Add file path context
    pub fn with_file_path(mut self, path: impl Into<String>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the snippet ID context, if any
    pub fn snippet_id(&self) -> Option<&SnippetId> {
        self.snippet_id.as_ref()
    }

    /// Get the file path context, if any
    pub fn file_path(&self) -> Option<&str> {
        self.file_path.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(id) = &self.snippet_id {
            write!(f, " (snippet_id: {})", id)?;
        }
        if let Some(path) = &self.file_path {
            write!(f, " (file_path: {})", path)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Error taxonomy for snippet lifecycle operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CryptError {
    /// Attempted to bury an empty or whitespace-only selection
    #[error("Nothing to bury: selection is empty or whitespace-only")]
    EmptyContent,

    /// No stored snippet has this id
    #[error("Snippet not found: {snippet_id}")]
    SnippetNotFound { snippet_id: SnippetId },

    /// Storage medium unavailable or payload could not be (de)serialized
    #[error("Persistence failure during {op}: {message}")]
    Persistence { op: String, message: String },

    /// Original file is gone at restore time
    #[error("File unavailable: {file_path}")]
    FileUnavailable { file_path: String },

    /// Malformed caller input (bad path, bad range)
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },
}

impl CryptError {
    /// Shorthand for a persistence failure
    pub fn persistence(op: impl Into<String>, message: impl Into<String>) -> Self {
        CryptError::Persistence {
            op: op.into(),
            message: message.into(),
        }
    }
}

/// Conversion from CryptError to ExError
impl From<CryptError> for ExError {
    fn from(err: CryptError) -> Self {
        match err {
            CryptError::EmptyContent => ExError::new(ExErrorKind::EmptyContent)
                .with_op("bury")
                .with_message("Selection is empty or whitespace-only"),

            CryptError::SnippetNotFound { snippet_id } => ExError::new(ExErrorKind::NotFound)
                .with_snippet_id(snippet_id)
                .with_message("Snippet not found"),

            CryptError::Persistence { op, message } => ExError::new(ExErrorKind::Persistence)
                .with_op(op)
                .with_message(message),

            CryptError::FileUnavailable { file_path } => {
                ExError::new(ExErrorKind::FileUnavailable)
                    .with_file_path(file_path)
                    .with_message("Original file is no longer available")
            }

            CryptError::InvalidInput { reason } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(reason)
            }
        }
    }
}
