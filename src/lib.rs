//! # framegrab
//!
//! Batch-extract the first decodable frame from every video file in a
//! directory and save it as a PNG image alongside the source, powered by
//! FFmpeg via the [`ffmpeg-next`](https://crates.io/crates/ffmpeg-next)
//! crate.
//!
//! ## Quick Start
//!
//! ### Process a Directory
//!
//! ```no_run
//! use framegrab::RunOutcome;
//!
//! match framegrab::run("videos".as_ref()).unwrap() {
//!     RunOutcome::NoCandidates => println!("no videos found"),
//!     RunOutcome::Completed(summary) => {
//!         println!(
//!             "{} total, {} successful, {} failed",
//!             summary.total, summary.successful, summary.failed,
//!         );
//!     }
//! }
//! ```
//!
//! ### Extract One Frame
//!
//! ```no_run
//! use framegrab::DecodeSession;
//!
//! let mut session = DecodeSession::open("input.mp4").unwrap();
//! let frame = session.first_frame().unwrap();
//! frame.save("input_first_frame.png").unwrap();
//! ```
//!
//! ## Behaviour
//!
//! - **Discovery** is non-recursive and purely lexical: files whose
//!   extension (case-insensitive) is one of `mp4`, `avi`, `mov`, `mkv`,
//!   `wmv`, `flv`, in sorted order.
//! - **Outputs** are named `<stem>_first_frame.png`, written into the
//!   source directory, silently overwriting earlier outputs — re-runs are
//!   idempotent.
//! - **Failures are contained per file.** A corrupt or unreadable file is
//!   logged, counted as failed, and the run moves on. Only directory
//!   precondition failures abort a run.
//! - **Strictly sequential.** One decode session is open at a time and is
//!   released before the next file is touched.
//!
//! ## Requirements
//!
//! FFmpeg development libraries must be installed on your system.

mod conversion;
pub mod discovery;
pub mod error;
pub mod extractor;
pub mod ffmpeg;
pub mod progress;
pub mod runner;
pub mod validation;

pub use discovery::{VIDEO_EXTENSIONS, discover_videos, is_video_candidate};
pub use error::FramegrabError;
pub use extractor::{
    DecodeSession, ExtractionResult, OUTPUT_SUFFIX, extract_first_frame, output_path_for,
};
pub use ffmpeg::{FfmpegLogLevel, set_ffmpeg_log_level};
pub use progress::{ProgressCallback, ProgressInfo};
pub use runner::{RunOutcome, RunSummary, run, run_with_progress};
pub use validation::validate_directory;
