use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::{EnsureFolderError, NotADirectoryError};
use super::syscall;

/// Makes sure that a folder exists at `path`, creating it and any missing parents if it doesn't.
/// Returns the path it was given, so the call can be used inline.
///
/// Symlinks to folders count as folders.
///
/// # Errors
/// Returns [`EnsureFolderError::NotADirectory`] if something other than a folder is already at
/// `path`, or another [`EnsureFolderError`] if the path can't be searched or created.
///
/// # Examples
/// ```
/// # use anenome::fs::ensure_folder;
/// let root = tempfile::tempdir().unwrap();
/// let logs = ensure_folder(root.path().join("logs/today")).unwrap();
/// assert!(logs.is_dir());
/// ```
pub fn ensure_folder<P: AsRef<Path>>(path: P) -> Result<PathBuf, EnsureFolderError> {
    let path = path.as_ref();

    match syscall::is_dir(path)? {
        Some(true) => return Ok(path.to_owned()),
        Some(false) => Err(NotADirectoryError)?,
        None => create_all(path)?,
    }

    debug!(path = %path.display(), "created folder");
    Ok(path.to_owned())
}

fn create_all(path: &Path) -> Result<(), EnsureFolderError> {
    // An empty parent means a relative path with one component, which is relative to the cwd.
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if syscall::is_dir(parent)?.is_none() {
            create_all(parent)?;
        }
    }

    syscall::mkdir(path)
}
