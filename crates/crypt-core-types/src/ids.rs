//! Identifier types for buried snippets
//!
//! Snippet ids are opaque strings. Freshly generated ids are UUIDv7, so they
//! sort by creation time and stay distinct for ids minted within the same
//! millisecond. Ids loaded from older stores may have any shape.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of a buried snippet
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnippetId(String);

impl SnippetId {
    /// Generate a new SnippetId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Wrap an existing id (from storage or a command argument)
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

impl Default for SnippetId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SnippetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SnippetId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_snippet_id_generation() {
        let id1 = SnippetId::new();
        let id2 = SnippetId::new();

        assert_ne!(id1, id2);
        assert!(!id1.as_str().is_empty());
    }

    #[test]
    fn test_burst_generation_is_distinct() {
        // Far more ids than fit in one millisecond tick
        let ids: HashSet<SnippetId> = (0..10_000).map(|_| SnippetId::new()).collect();
        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn test_snippet_id_display() {
        let id = SnippetId::from_string("1700000000000");
        assert_eq!(format!("{}", id), "1700000000000");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = SnippetId::from_string("abc");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abc\"");

        let back: SnippetId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
