//! Atomic Save Operations
//!
//! Write-then-rename file persistence.

use std::path::{Path, PathBuf};

use crate::error::{AtlasResult, ErrorContext};

/// Sibling path used while `path` is being written
pub fn temporary_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write `bytes` to `path`, creating parent directories as needed
pub fn write_atomic(path: &Path, bytes: &[u8]) -> AtlasResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).write_context(path)?;
    }

    let temp = temporary_path(path);
    std::fs::write(&temp, bytes).write_context(path)?;

    if let Err(e) = std::fs::rename(&temp, path) {
        let _ = std::fs::remove_file(&temp);
        return Err(e).write_context(path);
    }

    log::debug!(
        "[atomic_save_operations::write_atomic] Wrote {} bytes to {}",
        bytes.len(),
        path.display()
    );
    Ok(())
}
