//! Common file system operations with unified error handling

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{self, Result};

/// Remove `path` and everything under it if present, then create it empty
pub fn recreate_dir(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_dir_all(path).map_err(|e| error::fs::write_failed(path, &e))?;
    }
    fs::create_dir_all(path).map_err(|e| error::fs::write_failed(path, &e))?;
    Ok(())
}

/// Ensure parent directory exists for a path
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| error::fs::write_failed(parent, &e))?;
    }
    Ok(())
}

/// Remove a file, symlink or directory tree
pub fn remove_path(path: &Path) -> std::io::Result<()> {
    let metadata = fs::symlink_metadata(path)?;
    if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

/// Empty a directory, or create it when it does not exist.
///
/// Entries are removed one at a time. A failure on one entry is returned in
/// the list and does not stop the remaining entries from being removed.
pub fn clear_dir_contents(path: &Path) -> Result<Vec<(PathBuf, std::io::Error)>> {
    clear_dir_contents_with(path, remove_path)
}

fn clear_dir_contents_with(
    path: &Path,
    remove: impl Fn(&Path) -> std::io::Result<()>,
) -> Result<Vec<(PathBuf, std::io::Error)>> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| error::fs::write_failed(path, &e))?;
        return Ok(Vec::new());
    }

    let mut failures = Vec::new();
    let entries = fs::read_dir(path).map_err(|e| error::fs::read_failed(path, &e))?;
    for entry in entries {
        let entry_path = match entry {
            Ok(entry) => entry.path(),
            Err(e) => {
                failures.push((path.to_path_buf(), e));
                continue;
            }
        };
        if let Err(e) = remove(&entry_path) {
            failures.push((entry_path, e));
        }
    }

    Ok(failures)
}

/// Path of `path` relative to `base`, joined with `/` on every platform
pub fn relative_slash_path(base: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(base).ok()?;
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().to_string())
        .collect();
    Some(parts.join("/"))
}

/// Removes a scratch file or directory when dropped
#[derive(Debug)]
pub struct CleanupGuard {
    path: PathBuf,
}

impl CleanupGuard {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for CleanupGuard {
    fn drop(&mut self) {
        if fs::symlink_metadata(&self.path).is_err() {
            return;
        }
        if let Err(e) = remove_path(&self.path) {
            crate::ui::warn(&format!(
                "Failed to remove {}: {e}",
                self.path.display()
            ));
        }
    }
}
