//! Crypt Core - snippet lifecycle kernel
//!
//! This crate provides the host-independent part of Crypt:
//! - The Snippet model (a buried code fragment and its origin)
//! - The storage contract and an in-memory store
//! - Lifecycle operations: bury, find, resurrect, delete, rename reconciliation
//! - Restore-line policy for documents that changed since burial
//! - Marker (gutter + ghost text + hover) and sidebar derivation
//! - Host capability traits so all of the above runs without an editor
//! - Error and logging facilities shared by the other crates

pub mod decorations;
pub mod errors;
pub mod host;
pub mod listing;
pub mod logging_facility;
pub mod model;
pub mod ops;

// Used by the logging macros
#[doc(hidden)]
pub use crypt_core_types;
#[doc(hidden)]
pub use tracing as __tracing;

// Re-export commonly used types
pub use crypt_core_types::SnippetId;
pub use decorations::{compute_markers, DocumentView, Marker};
pub use errors::{CryptError, ExError, ExErrorKind, Result};
pub use host::{DocumentReader, DocumentWriter, RenameEvent, RenameEventSource};
pub use listing::{sidebar_entries, SidebarEntry};
pub use model::Snippet;
pub use ops::{resolve_restore_target, MemoryStore, SnippetStore};
