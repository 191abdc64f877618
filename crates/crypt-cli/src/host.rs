//! File-system host
//!
//! Plays the editor's part for the CLI: documents are files on disk, lines
//! are separated by `\n`, and "untitled documents" are files written into a
//! fallback directory.

use crypt_core::{CryptError, DocumentReader, DocumentWriter, Result};
use crypt_store::atomic::atomic_write;
use std::fs;
use std::path::{Path, PathBuf};

const UNTITLED_EXTENSION: &str = "resurrected";

pub struct FsDocumentHost {
    fallback_dir: PathBuf,
}

impl FsDocumentHost {
    pub fn new(fallback_dir: impl Into<PathBuf>) -> Self {
        Self {
            fallback_dir: fallback_dir.into(),
        }
    }

    fn read(path: &str) -> Result<String> {
        fs::read_to_string(path).map_err(|_| CryptError::FileUnavailable {
            file_path: path.to_string(),
        })
    }

    /// First free `<name>.resurrected`, then `<name>.2.resurrected`, ...
    fn untitled_path(&self, name_hint: &str) -> PathBuf {
        let stem = if name_hint.is_empty() {
            "untitled"
        } else {
            name_hint
        };

        let mut candidate = self
            .fallback_dir
            .join(format!("{}.{}", stem, UNTITLED_EXTENSION));
        let mut n = 2;
        while candidate.exists() {
            candidate = self
                .fallback_dir
                .join(format!("{}.{}.{}", stem, n, UNTITLED_EXTENSION));
            n += 1;
        }
        candidate
    }
}

impl DocumentReader for FsDocumentHost {
    fn exists(&self, path: &str) -> bool {
        Path::new(path).is_file()
    }

    fn line_count(&self, path: &str) -> Option<usize> {
        fs::read_to_string(path)
            .ok()
            .map(|text| text.split('\n').count())
    }
}

impl DocumentWriter for FsDocumentHost {
    fn insert_at_line(&mut self, path: &str, line: usize, text: &str) -> Result<()> {
        let content = Self::read(path)?;
        let offset = line_offset(&content, line);

        let mut updated = String::with_capacity(content.len() + text.len() + 1);
        updated.push_str(&content[..offset]);
        if offset == content.len() && !content.is_empty() && !content.ends_with('\n') {
            updated.push('\n');
        }
        updated.push_str(text);
        updated.push_str(&content[offset..]);

        atomic_write(Path::new(path), updated.as_bytes())
    }

    fn open_untitled(
        &mut self,
        name_hint: &str,
        text: &str,
        _language_id: Option<&str>,
    ) -> Result<String> {
        let path = self.untitled_path(name_hint);
        let mut body = text.to_string();
        if !body.ends_with('\n') {
            body.push('\n');
        }

        atomic_write(&path, body.as_bytes())?;
        Ok(path.to_string_lossy().into_owned())
    }
}

/// Byte offset where zero-based `line` starts; past the last line means the end
fn line_offset(content: &str, line: usize) -> usize {
    if line == 0 {
        return 0;
    }
    content
        .match_indices('\n')
        .nth(line - 1)
        .map(|(i, _)| i + 1)
        .unwrap_or(content.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> String {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_line_offset() {
        assert_eq!(line_offset("a\nb\nc", 0), 0);
        assert_eq!(line_offset("a\nb\nc", 2), 4);
        assert_eq!(line_offset("a\nb\nc", 7), 5);
    }

    #[test]
    fn test_line_count_counts_trailing_empty_line() {
        let dir = TempDir::new().unwrap();
        let host = FsDocumentHost::new(dir.path());

        assert_eq!(host.line_count(&write(&dir, "a.ts", "x\ny\n")), Some(3));
        assert_eq!(host.line_count(&write(&dir, "b.ts", "")), Some(1));
        assert_eq!(host.line_count("/definitely/not/here.ts"), None);
    }

    #[test]
    fn test_insert_in_middle() {
        let dir = TempDir::new().unwrap();
        let mut host = FsDocumentHost::new(dir.path());
        let path = write(&dir, "a.ts", "a\nc\n");

        host.insert_at_line(&path, 1, "b\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "a\nb\nc\n");
    }

    #[test]
    fn test_append_without_trailing_newline() {
        let dir = TempDir::new().unwrap();
        let mut host = FsDocumentHost::new(dir.path());
        let path = write(&dir, "a.ts", "a\nb");

        host.insert_at_line(&path, 2, "c\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "a\nb\nc\n");
    }

    #[test]
    fn test_untitled_names_do_not_collide() {
        let dir = TempDir::new().unwrap();
        let mut host = FsDocumentHost::new(dir.path());

        let first = host.open_untitled("b.ts", "one", None).unwrap();
        let second = host.open_untitled("b.ts", "two", None).unwrap();

        assert!(first.ends_with("b.ts.resurrected"));
        assert!(second.ends_with("b.ts.2.resurrected"));
        assert_eq!(fs::read_to_string(&second).unwrap(), "two\n");
    }
}
