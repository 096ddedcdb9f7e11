//! Target directory validation.
//!
//! A run reads videos from and writes PNGs into the same directory, so the
//! directory must exist, be a directory, and be both readable and writable
//! by the current process. Any failed check is fatal and aborts the run
//! before discovery executes.

use std::{fs, path::Path};

use crate::error::FramegrabError;

/// Validate the target directory before a run.
///
/// Checks, in order: the path exists, it is a directory, it is readable
/// (a `read_dir` probe succeeds), and it is writable (a temporary probe
/// file can be created and removed).
///
/// # Errors
///
/// - [`FramegrabError::DirectoryNotFound`] if the path does not exist.
/// - [`FramegrabError::NotADirectory`] if the path is not a directory.
/// - [`FramegrabError::DirectoryNotAccessible`] if either access probe fails.
pub fn validate_directory(directory: &Path) -> Result<(), FramegrabError> {
    if !directory.exists() {
        return Err(FramegrabError::DirectoryNotFound {
            path: directory.to_path_buf(),
        });
    }

    if !directory.is_dir() {
        return Err(FramegrabError::NotADirectory {
            path: directory.to_path_buf(),
        });
    }

    fs::read_dir(directory).map_err(|error| FramegrabError::DirectoryNotAccessible {
        path: directory.to_path_buf(),
        reason: format!("not readable: {error}"),
    })?;

    // Permission bits alone don't tell the whole story (ACLs, read-only
    // mounts), so probe writability by creating a throwaway file.
    let probe = directory.join(format!(".framegrab_probe_{}", std::process::id()));
    match fs::File::create(&probe) {
        Ok(file) => {
            drop(file);
            let _ = fs::remove_file(&probe);
            Ok(())
        }
        Err(error) => Err(FramegrabError::DirectoryNotAccessible {
            path: directory.to_path_buf(),
            reason: format!("not writable: {error}"),
        }),
    }
}
