pub mod restore;
pub mod snippet_ops;
pub mod store;

pub use restore::{resolve_restore_target, restore_text};
pub use store::{MemoryStore, SnippetStore};
