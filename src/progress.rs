//! Progress reporting.
//!
//! The batch runner reports progress once per processed file through the
//! [`ProgressCallback`] trait. Callbacks are purely observational — they
//! cannot halt or alter the run.
//!
//! # Example
//!
//! ```no_run
//! use framegrab::{ProgressCallback, ProgressInfo};
//!
//! struct PrintProgress;
//!
//! impl ProgressCallback for PrintProgress {
//!     fn on_progress(&self, info: &ProgressInfo) {
//!         println!("{}/{}", info.current, info.total);
//!     }
//! }
//!
//! let outcome = framegrab::run_with_progress("videos".as_ref(), &PrintProgress)?;
//! # Ok::<(), framegrab::FramegrabError>(())
//! ```

/// A snapshot of batch progress, delivered after each processed file.
#[derive(Debug, Clone, Copy)]
pub struct ProgressInfo {
    /// How many files have been processed so far (successes and failures).
    pub current: u64,
    /// Total number of candidates in this run.
    pub total: u64,
}

/// Trait for receiving progress updates during a batch run.
///
/// Implementations must be [`Send`] and [`Sync`] so a single callback can
/// be shared with terminal progress bars that update from any thread.
pub trait ProgressCallback: Send + Sync {
    /// Called once per processed file.
    fn on_progress(&self, info: &ProgressInfo);
}

/// A no-op implementation that discards all progress notifications.
///
/// This is the default when no callback is configured.
pub(crate) struct NoOpProgress;

impl ProgressCallback for NoOpProgress {
    fn on_progress(&self, _info: &ProgressInfo) {}
}
