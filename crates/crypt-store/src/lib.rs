//! Crypt Store - durable snippet storage
//!
//! Provides:
//! - A versioned JSON document format with legacy migration
//! - Atomic (temp + fsync + rename) file replacement
//! - Per-workspace store layout
//! - [`JsonFileStore`], the file-backed `SnippetStore`

pub mod atomic;
pub mod errors;
pub mod format;
pub mod json_store;
pub mod scope;

// Re-export key types
pub use errors::Result;
pub use json_store::JsonFileStore;
pub use scope::STORAGE_KEY;
