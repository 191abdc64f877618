use crypt_core::ops::snippet_ops;
use crypt_core::{MemoryStore, Snippet};

/// Create a new empty store for testing
#[allow(dead_code)]
pub fn new_store() -> MemoryStore {
    MemoryStore::new()
}

/// Bury `code` at `(path, line)` and return the stored snippet
///
/// Panics on failure; only for test setup.
#[allow(dead_code)]
pub fn bury_at(store: &mut MemoryStore, path: &str, line: usize, code: &str) -> Snippet {
    snippet_ops::bury(store, path, line, code, None).unwrap()
}
