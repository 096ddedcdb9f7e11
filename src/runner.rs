//! Directory-wide batch orchestration.
//!
//! [`run`] drives one pass over a directory: validate, discover once, then
//! extract the first frame of every candidate sequentially, tallying a
//! [`RunSummary`]. Individual failures never stop the pass; only the
//! directory precondition checks can abort it.

use std::path::Path;

use crate::{
    discovery,
    error::FramegrabError,
    extractor,
    progress::{NoOpProgress, ProgressCallback, ProgressInfo},
    validation,
};

/// Aggregate success/failure counters for one directory pass.
///
/// `successful + failed == total` holds at the end of every run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of candidates processed.
    pub total: u64,
    /// Number of candidates that produced an output PNG.
    pub successful: u64,
    /// Number of candidates that failed at any per-file step.
    pub failed: u64,
}

impl RunSummary {
    fn record(&mut self, result: &extractor::ExtractionResult) {
        self.total += 1;
        if result.is_success() {
            self.successful += 1;
        } else {
            self.failed += 1;
        }
    }

    /// Returns `true` if the counters add up.
    pub fn is_consistent(&self) -> bool {
        self.successful + self.failed == self.total
    }
}

/// Outcome of one directory pass.
///
/// An empty directory is a benign outcome, not an error, so it gets its own
/// variant rather than a zeroed summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Discovery found no video candidates; nothing was processed.
    NoCandidates,
    /// Every candidate was processed exactly once.
    Completed(RunSummary),
}

/// Process every video file in `directory`, without progress reporting.
///
/// See [`run_with_progress`] for the full contract.
pub fn run(directory: &Path) -> Result<RunOutcome, FramegrabError> {
    run_with_progress(directory, &NoOpProgress)
}

/// Process every video file in `directory`.
///
/// Validates the directory, discovers candidates once, then extracts the
/// first frame of each candidate in discovery order. `progress` is invoked
/// once per processed file. Per-file failures are logged and counted but
/// never abort the pass; there is no retry within a run.
///
/// # Errors
///
/// Only directory precondition failures propagate — see
/// [`validate_directory`](crate::validate_directory). Everything that goes
/// wrong after discovery is contained in the returned [`RunSummary`].
///
/// # Example
///
/// ```no_run
/// use framegrab::RunOutcome;
///
/// match framegrab::run("videos".as_ref())? {
///     RunOutcome::NoCandidates => println!("nothing to do"),
///     RunOutcome::Completed(summary) => {
///         println!("{}/{} extracted", summary.successful, summary.total);
///     }
/// }
/// # Ok::<(), framegrab::FramegrabError>(())
/// ```
pub fn run_with_progress(
    directory: &Path,
    progress: &dyn ProgressCallback,
) -> Result<RunOutcome, FramegrabError> {
    validation::validate_directory(directory)?;

    let candidates = discovery::discover_videos(directory)?;

    if candidates.is_empty() {
        log::warn!("No video files found in {}", directory.display());
        return Ok(RunOutcome::NoCandidates);
    }

    log::info!(
        "Found {} video file(s) in {}",
        candidates.len(),
        directory.display(),
    );

    let total = candidates.len() as u64;
    let mut summary = RunSummary::default();

    for (index, candidate) in candidates.iter().enumerate() {
        let result = extractor::extract_first_frame(candidate);
        summary.record(&result);

        progress.on_progress(&ProgressInfo {
            current: index as u64 + 1,
            total,
        });
    }

    debug_assert!(summary.is_consistent());

    log::info!(
        "Processing complete: {} total, {} successful, {} failed",
        summary.total,
        summary.successful,
        summary.failed,
    );

    Ok(RunOutcome::Completed(summary))
}
