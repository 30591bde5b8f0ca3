/**
 * Directory Utilities
 *
 * `ensure_directory` creates exactly one level; `clear_directory` empties a
 * directory without removing it and never follows symlinks.
 */
use std::path::Path;

use crate::error::{Error, Result};

/// Create `path` if nothing exists there yet
///
/// Parents are not created: a missing parent is an error.
pub fn ensure_directory(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }

    match std::fs::create_dir(path) {
        Ok(()) => {
            println!("[Paths] Created directory: {:?}", path);
            Ok(())
        }
        // Lost a race with another creator
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(Error::io(path, e)),
    }
}

/// Remove everything inside `path`, keeping `path` itself
///
/// Symlinks are unlinked rather than followed. Subdirectories go through
/// `std::fs::remove_dir_all`, which opens each level relative to its parent
/// and so cannot be redirected by a symlink swapped in mid-walk.
pub fn clear_directory(path: &Path) -> Result<()> {
    let entries = std::fs::read_dir(path).map_err(|e| Error::io(path, e))?;

    let mut removed = 0usize;
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(path, e))?;
        let entry_path = entry.path();
        let file_type = entry.file_type().map_err(|e| Error::io(&entry_path, e))?;

        let removal = if file_type.is_dir() {
            std::fs::remove_dir_all(&entry_path)
        } else {
            remove_non_dir(&entry_path)
        };
        removal.map_err(|e| Error::io(&entry_path, e))?;

        removed += 1;
    }

    log::debug!("[Paths] Cleared {} entries from {:?}", removed, path);
    Ok(())
}

// Windows directory symlinks need remove_dir; everything else is a file
#[cfg(windows)]
fn remove_non_dir(path: &Path) -> std::io::Result<()> {
    std::fs::remove_file(path).or_else(|_| std::fs::remove_dir(path))
}

#[cfg(not(windows))]
fn remove_non_dir(path: &Path) -> std::io::Result<()> {
    std::fs::remove_file(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_directory_no_parents() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");

        let err = ensure_directory(&nested).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(!nested.exists());
    }

    #[test]
    fn test_ensure_directory_existing_file_is_noop() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("file.txt");
        std::fs::write(&file, b"x").unwrap();

        ensure_directory(&file).unwrap();
        assert!(file.is_file());
    }

    #[test]
    fn test_clear_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");

        assert!(matches!(clear_directory(&missing), Err(Error::Io { .. })));
    }
}
