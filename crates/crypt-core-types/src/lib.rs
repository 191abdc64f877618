//! Core types shared across Crypt crates
//!
//! - **Identifiers**: SnippetId
//! - **Schema constants**: canonical logging event values

pub mod ids;
pub mod schema;

pub use ids::SnippetId;
