//! Per-workspace store layout
//!
//! Each workspace gets its own store file under the data directory, keyed by
//! a digest of the workspace root so unrelated projects never share buried
//! snippets:
//!
//! `<data_dir>/workspaces/<workspace-hash>/crypt.buriedCode.json`

use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

/// Storage key of the snippet collection, used as the store file stem
pub const STORAGE_KEY: &str = "crypt.buriedCode";

const WORKSPACES_DIR: &str = "workspaces";

/// Digest of a workspace root, 16 hex characters
///
/// The path is canonicalized when possible so `./proj` and `/abs/proj` agree.
pub fn workspace_hash(workspace_root: &Path) -> String {
    let canonical = workspace_root
        .canonicalize()
        .unwrap_or_else(|_| workspace_root.to_path_buf());

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_os_str().as_encoded_bytes());
    let hash = hasher.finalize();

    hex::encode(&hash[..8])
}

/// Directory holding the store of one workspace
pub fn workspace_dir(data_dir: &Path, workspace_root: &Path) -> PathBuf {
    data_dir
        .join(WORKSPACES_DIR)
        .join(workspace_hash(workspace_root))
}

/// Store file of one workspace
pub fn store_file(data_dir: &Path, workspace_root: &Path) -> PathBuf {
    workspace_dir(data_dir, workspace_root).join(format!("{}.json", STORAGE_KEY))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_hash_deterministic() {
        let a = workspace_hash(Path::new("/nonexistent/proj-a"));
        let b = workspace_hash(Path::new("/nonexistent/proj-a"));
        let c = workspace_hash(Path::new("/nonexistent/proj-b"));

        assert_eq!(a, b);
        assert_eq!(a.len(), 16);
        assert_ne!(a, c);
    }

    #[test]
    fn test_store_file_layout() {
        let path = store_file(Path::new("/data"), Path::new("/nonexistent/proj-a"));
        let hash = workspace_hash(Path::new("/nonexistent/proj-a"));

        assert_eq!(
            path,
            PathBuf::from("/data/workspaces")
                .join(hash)
                .join("crypt.buriedCode.json")
        );
    }
}
