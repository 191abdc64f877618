//! Atomic write primitives
//!
//! Temp file + fsync + rename, so readers never observe a partial store.

use crate::errors::{io_error, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically replace `target_path` with `content`
///
/// The parent directory is created if needed. On failure the previous file
/// (if any) is left in place and the temp file is removed.
///
/// # Errors
///
/// Returns `Persistence` if any filesystem step fails.
pub fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target_path.parent() {
        fs::create_dir_all(parent).map_err(|e| io_error("create_store_dir", e))?;
    }

    let temp_path = temp_path_for(target_path);

    if let Err(e) = write_synced(&temp_path, content) {
        let _ = fs::remove_file(&temp_path);
        return Err(io_error("write_store_temp", e));
    }

    if let Err(e) = fs::rename(&temp_path, target_path) {
        let _ = fs::remove_file(&temp_path);
        return Err(io_error("rename_store_temp", e));
    }

    Ok(())
}

fn write_synced(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(content)?;
    file.sync_all()
}

fn temp_path_for(target_path: &Path) -> PathBuf {
    let mut name = target_path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(format!(".tmp.{}", std::process::id()));
    target_path.with_file_name(name)
}
