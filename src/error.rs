//! Error types for the `framegrab` crate.
//!
//! This module defines [`FramegrabError`], the unified error type returned by
//! all fallible operations in the crate. Errors carry the offending path and
//! a human-readable reason so a failure can be logged without additional
//! context at the call site.

use std::{io::Error as IoError, path::PathBuf};

use ffmpeg_next::Error as FfmpegError;
use image::ImageError;
use thiserror::Error;

/// The unified error type for all `framegrab` operations.
///
/// Directory-level variants are preconditions: they abort a run before any
/// file is touched. File-level variants are contained per file — the batch
/// runner converts them into a failed
/// [`ExtractionResult`](crate::ExtractionResult) and keeps going.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FramegrabError {
    /// The target directory does not exist.
    #[error("Directory does not exist: {path}")]
    DirectoryNotFound {
        /// Path that was passed to [`crate::validate_directory`].
        path: PathBuf,
    },

    /// The target path exists but is not a directory.
    #[error("Path is not a directory: {path}")]
    NotADirectory {
        /// The offending path.
        path: PathBuf,
    },

    /// The target directory is not readable and writable by this process.
    #[error("Insufficient permissions for directory {path}: {reason}")]
    DirectoryNotAccessible {
        /// The offending directory.
        path: PathBuf,
        /// Which access check failed, and why.
        reason: String,
    },

    /// A video file could not be opened for decoding.
    #[error("Failed to open video file at {path}: {reason}")]
    FileOpen {
        /// Path that was passed to [`crate::DecodeSession::open`].
        path: PathBuf,
        /// Underlying reason the open failed.
        reason: String,
    },

    /// The file opened, but contains no video stream.
    #[error("No video stream found in file")]
    NoVideoStream,

    /// No frame could be decoded from the start of the stream.
    #[error("Failed to decode video frame: {0}")]
    FrameDecode(String),

    /// An error originating from the FFmpeg libraries.
    #[error("FFmpeg error: {0}")]
    Ffmpeg(String),

    /// An I/O error occurred while reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// An error from the `image` crate while encoding the output PNG.
    #[error("Image processing error: {0}")]
    Image(#[from] ImageError),
}

impl From<FfmpegError> for FramegrabError {
    fn from(error: FfmpegError) -> Self {
        FramegrabError::Ffmpeg(error.to_string())
    }
}
