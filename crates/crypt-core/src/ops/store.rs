use crate::errors::{CryptError, Result};
use crate::model::Snippet;

/// Storage contract for the buried-snippet collection
///
/// The whole collection is read and written as one ordered sequence; there is
/// no partial-update primitive. Implementations must make `replace` durable
/// before returning and must leave their in-memory view untouched when it
/// fails, so callers can keep going with the previous state.
///
/// Mutation takes `&mut self`: the single-writer model is enforced by the
/// borrow checker instead of a lock.
pub trait SnippetStore {
    /// Current collection, in insertion order
    fn snippets(&self) -> &[Snippet];

    /// Overwrite the whole collection
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if the medium is unavailable or the payload
    /// cannot be serialized.
    fn replace(&mut self, snippets: Vec<Snippet>) -> Result<()>;

    /// Last application version recorded via [`SnippetStore::set_last_seen_version`]
    fn last_seen_version(&self) -> Option<&str>;

    /// Remember the application version the user last ran
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if the value cannot be written.
    fn set_last_seen_version(&mut self, version: &str) -> Result<()>;
}

/// In-memory store
///
/// Not durable. Used by tests and throwaway sessions; also the reference for
/// what every durable store must behave like.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    snippets: Vec<Snippet>,
    last_seen_version: Option<String>,
    fail_writes: bool,
}

impl MemoryStore {
    /// Create a new empty MemoryStore
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `snippets`
    pub fn with_snippets(snippets: Vec<Snippet>) -> Self {
        Self {
            snippets,
            ..Self::default()
        }
    }

    /// Make every subsequent write fail, simulating an unavailable medium
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    fn check_writable(&self, op: &str) -> Result<()> {
        if self.fail_writes {
            return Err(CryptError::persistence(op, "storage medium unavailable"));
        }
        Ok(())
    }
}

impl SnippetStore for MemoryStore {
    fn snippets(&self) -> &[Snippet] {
        &self.snippets
    }

    fn replace(&mut self, snippets: Vec<Snippet>) -> Result<()> {
        self.check_writable("replace")?;
        self.snippets = snippets;
        Ok(())
    }

    fn last_seen_version(&self) -> Option<&str> {
        self.last_seen_version.as_deref()
    }

    fn set_last_seen_version(&mut self, version: &str) -> Result<()> {
        self.check_writable("set_last_seen_version")?;
        self.last_seen_version = Some(version.to_string());
        Ok(())
    }
}
