//! Video file discovery.
//!
//! Lists the immediate contents of a directory and keeps the entries whose
//! file extension (case-insensitive) is one of the recognised video
//! suffixes. Matching is purely lexical — a text file renamed to `.mp4`
//! will be picked up and a real video with an unrecognised extension will
//! not. That is an accepted limitation, not something to sniff around.

use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

use crate::error::FramegrabError;

/// File extensions (lowercase, without the dot) treated as video files.
pub const VIDEO_EXTENSIONS: [&str; 6] = ["mp4", "avi", "mov", "mkv", "wmv", "flv"];

/// Returns `true` if the path's extension matches one of
/// [`VIDEO_EXTENSIONS`], ignoring case.
pub fn is_video_candidate(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .map(|extension| {
            let extension = extension.to_ascii_lowercase();
            VIDEO_EXTENSIONS.contains(&extension.as_str())
        })
        .unwrap_or(false)
}

/// List the video candidates in `directory`.
///
/// Non-recursive: only the immediate directory contents are scanned.
/// Subdirectories are skipped even when their names carry a video suffix.
/// Results are sorted by path so repeated runs process files in the same
/// order.
///
/// # Errors
///
/// Returns [`FramegrabError::Io`] if the directory cannot be read. Run
/// [`validate_directory`](crate::validate_directory) first to turn that
/// into a precondition error with context.
///
/// # Example
///
/// ```no_run
/// let candidates = framegrab::discover_videos("videos".as_ref())?;
/// for candidate in &candidates {
///     println!("{}", candidate.display());
/// }
/// # Ok::<(), framegrab::FramegrabError>(())
/// ```
pub fn discover_videos(directory: &Path) -> Result<Vec<PathBuf>, FramegrabError> {
    let mut candidates = Vec::new();

    for entry in fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        if is_video_candidate(&path) {
            candidates.push(path);
        }
    }

    candidates.sort();

    log::debug!(
        "Discovered {} video candidate(s) in {}",
        candidates.len(),
        directory.display(),
    );

    Ok(candidates)
}
