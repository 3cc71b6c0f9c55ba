//! File system utility functions

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Ensure a directory exists, creating it if necessary
pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)
        .with_context(|| format!("Failed to create directory {}", path.display()))?;
    Ok(())
}

/// Replace `target` with `contents` without ever exposing a partial file
///
/// The bytes are staged in a temporary file in the same directory, given the
/// permissions of the existing target and renamed over it. With `executable`
/// set the owner-execute bit is added on unix.
pub fn replace_file_atomically(target: &Path, contents: &[u8], executable: bool) -> Result<()> {
    let directory = target
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut staged = NamedTempFile::new_in(directory)
        .with_context(|| format!("Failed to stage file in {}", directory.display()))?;
    staged.write_all(contents)?;
    staged.flush()?;

    if let Ok(metadata) = std::fs::metadata(target) {
        let mut permissions = metadata.permissions();
        #[cfg(unix)]
        if executable {
            use std::os::unix::fs::PermissionsExt;
            permissions.set_mode(permissions.mode() | 0o100);
        }
        #[cfg(not(unix))]
        let _ = executable;
        std::fs::set_permissions(staged.path(), permissions)?;
    }

    staged
        .persist(target)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to replace {}", target.display()))?;
    Ok(())
}
