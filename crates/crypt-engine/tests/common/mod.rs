use std::collections::{HashMap, HashSet};

use crypt_core::{CryptError, DocumentReader, DocumentWriter, MemoryStore, Result};
use crypt_engine::{CryptConfig, CryptContext};

/// Create a context over an empty in-memory store
#[allow(dead_code)]
pub fn new_context() -> CryptContext<MemoryStore> {
    CryptContext::new(MemoryStore::new(), CryptConfig::default())
}

/// In-memory editor: documents are line vectors keyed by path
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct FakeHost {
    pub docs: HashMap<String, Vec<String>>,
    pub untitled: Vec<(String, Option<String>)>,
    pub fail_inserts: bool,
    pub unreadable: HashSet<String>,
}

#[allow(dead_code)]
impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a document whose content is `lines`
    pub fn with_doc(mut self, path: &str, lines: &[&str]) -> Self {
        self.docs.insert(
            path.to_string(),
            lines.iter().map(|l| l.to_string()).collect(),
        );
        self
    }

    /// Mark an open document as present on disk but unreadable
    pub fn with_unreadable(mut self, path: &str) -> Self {
        self.unreadable.insert(path.to_string());
        self
    }

    pub fn lines(&self, path: &str) -> Vec<String> {
        self.docs.get(path).cloned().unwrap_or_default()
    }
}

impl DocumentReader for FakeHost {
    fn exists(&self, path: &str) -> bool {
        self.docs.contains_key(path) || self.unreadable.contains(path)
    }

    fn line_count(&self, path: &str) -> Option<usize> {
        if self.unreadable.contains(path) {
            return None;
        }
        self.docs.get(path).map(Vec::len)
    }
}

impl DocumentWriter for FakeHost {
    fn insert_at_line(&mut self, path: &str, line: usize, text: &str) -> Result<()> {
        if self.fail_inserts {
            return Err(CryptError::InvalidInput {
                reason: "edit rejected".to_string(),
            });
        }
        let doc = self
            .docs
            .get_mut(path)
            .ok_or_else(|| CryptError::FileUnavailable {
                file_path: path.to_string(),
            })?;

        let at = line.min(doc.len());
        let new_lines = text.strip_suffix('\n').unwrap_or(text).split('\n');
        for (offset, l) in new_lines.enumerate() {
            doc.insert(at + offset, l.to_string());
        }
        Ok(())
    }

    fn open_untitled(
        &mut self,
        _name_hint: &str,
        text: &str,
        language_id: Option<&str>,
    ) -> Result<String> {
        self.untitled
            .push((text.to_string(), language_id.map(str::to_string)));
        Ok(format!("Untitled-{}", self.untitled.len()))
    }
}
