//! First-frame extraction.
//!
//! [`DecodeSession`] owns an open FFmpeg demuxer and video decoder for one
//! file; both are destructor-backed, so the underlying file handle and
//! decoder context are released on every exit path when the session goes
//! out of scope. [`extract_first_frame`] wraps a session in the per-file
//! contract the batch runner relies on: it never propagates an error,
//! returning an [`ExtractionResult`] by value instead.

use std::path::{Path, PathBuf};

use ffmpeg_next::{
    codec::context::Context as CodecContext,
    format::{Pixel, context::Input},
    frame::Video as VideoFrame,
    media::Type,
    software::scaling::{Context as ScalingContext, Flags as ScalingFlags},
};
use image::{DynamicImage, RgbImage};

use crate::{conversion::frame_to_rgb_buffer, error::FramegrabError};

/// Suffix appended to the source's stem when deriving the output filename.
pub const OUTPUT_SUFFIX: &str = "_first_frame";

/// Outcome of processing one candidate file.
///
/// Success carries the path of the written PNG; failure carries the error
/// that stopped the extraction. Returned by value so failure handling is
/// visible in the function contract rather than hidden in a catch-all.
#[derive(Debug)]
pub struct ExtractionResult {
    /// The candidate video file this result describes.
    pub source: PathBuf,
    /// Output path on success, triggering error on failure.
    pub outcome: Result<PathBuf, FramegrabError>,
}

impl ExtractionResult {
    /// Returns `true` if a PNG was written for this file.
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// The written output path, if extraction succeeded.
    pub fn output_path(&self) -> Option<&Path> {
        self.outcome.as_ref().ok().map(PathBuf::as_path)
    }
}

/// An open decode session on one video file.
///
/// Holds the demuxer context and a video decoder built from the best video
/// stream's parameters. Dropping the session closes both.
///
/// # Example
///
/// ```no_run
/// use framegrab::DecodeSession;
///
/// let mut session = DecodeSession::open("input.mp4")?;
/// let frame = session.first_frame()?;
/// frame.save("first_frame.png")?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct DecodeSession {
    input_context: Input,
    decoder: ffmpeg_next::decoder::Video,
    video_stream_index: usize,
}

impl std::fmt::Debug for DecodeSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecodeSession")
            .field("video_stream_index", &self.video_stream_index)
            .finish_non_exhaustive()
    }
}

impl DecodeSession {
    /// Open a video file for decoding.
    ///
    /// Initialises FFmpeg (idempotent), opens the file, and builds a decoder
    /// for the best video stream.
    ///
    /// # Errors
    ///
    /// - [`FramegrabError::FileOpen`] if the file is missing, unreadable, or
    ///   not a recognisable media container.
    /// - [`FramegrabError::NoVideoStream`] if the container has no video
    ///   stream.
    /// - [`FramegrabError::Ffmpeg`] if the decoder cannot be created
    ///   (unsupported codec, bad stream parameters).
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, FramegrabError> {
        let path = path.as_ref();

        log::debug!("Opening decode session: {}", path.display());

        // Safe to call multiple times.
        ffmpeg_next::init().map_err(|error| FramegrabError::FileOpen {
            path: path.to_path_buf(),
            reason: format!("FFmpeg initialisation failed: {error}"),
        })?;

        let input_context =
            ffmpeg_next::format::input(&path).map_err(|error| FramegrabError::FileOpen {
                path: path.to_path_buf(),
                reason: error.to_string(),
            })?;

        let stream = input_context
            .streams()
            .best(Type::Video)
            .ok_or(FramegrabError::NoVideoStream)?;
        let video_stream_index = stream.index();

        let decoder_context = CodecContext::from_parameters(stream.parameters())?;
        let decoder = decoder_context.decoder().video()?;

        Ok(Self {
            input_context,
            decoder,
            video_stream_index,
        })
    }

    /// Decode the first frame of the video stream.
    ///
    /// Demuxes packets from the start of the stream, feeds them to the
    /// decoder, and returns the first frame it produces, converted to RGB8.
    /// Codecs with decode delay may need several packets before the first
    /// frame appears; the decoder is flushed if the packet stream ends
    /// without one.
    ///
    /// # Errors
    ///
    /// Returns [`FramegrabError::FrameDecode`] if the stream yields no
    /// decodable frame (zero-length stream, corrupt data), or
    /// [`FramegrabError::Ffmpeg`] for decoder and scaler failures.
    pub fn first_frame(&mut self) -> Result<DynamicImage, FramegrabError> {
        let width = self.decoder.width();
        let height = self.decoder.height();

        if width == 0 || height == 0 {
            return Err(FramegrabError::FrameDecode(format!(
                "video stream reports invalid dimensions {width}×{height}"
            )));
        }

        // Source pixel format → tightly-specified RGB24 at native size.
        let mut scaler = ScalingContext::get(
            self.decoder.format(),
            width,
            height,
            Pixel::RGB24,
            width,
            height,
            ScalingFlags::BILINEAR,
        )?;

        let mut decoded_frame = VideoFrame::empty();
        let mut rgb_frame = VideoFrame::empty();

        for (stream, packet) in self.input_context.packets() {
            if stream.index() != self.video_stream_index {
                continue;
            }

            self.decoder.send_packet(&packet)?;

            if self.decoder.receive_frame(&mut decoded_frame).is_ok() {
                scaler.run(&decoded_frame, &mut rgb_frame)?;
                return convert_frame_to_image(&rgb_frame, width, height);
            }
        }

        // Flush: a short stream may leave its only frame buffered.
        self.decoder.send_eof()?;
        if self.decoder.receive_frame(&mut decoded_frame).is_ok() {
            scaler.run(&decoded_frame, &mut rgb_frame)?;
            return convert_frame_to_image(&rgb_frame, width, height);
        }

        Err(FramegrabError::FrameDecode(
            "stream produced no decodable frames".to_string(),
        ))
    }
}

/// Derive the output path for a candidate video.
///
/// The source's extension is stripped, [`OUTPUT_SUFFIX`] appended, and a
/// `.png` extension added. The output sits in the same directory as the
/// source and silently overwrites any prior file of that name.
///
/// # Example
///
/// ```
/// use std::path::Path;
///
/// let output = framegrab::output_path_for(Path::new("videos/clip.mp4"));
/// assert_eq!(output, Path::new("videos/clip_first_frame.png"));
/// ```
pub fn output_path_for(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    source.with_file_name(format!("{stem}{OUTPUT_SUFFIX}.png"))
}

/// Extract the first frame of `source` and save it as a PNG alongside it.
///
/// This is the per-file boundary of a batch run: every error — open,
/// decode, or encode — is caught here, logged with the offending path and
/// reason, and folded into the returned [`ExtractionResult`]. One bad file
/// never aborts processing of the remainder.
pub fn extract_first_frame(source: &Path) -> ExtractionResult {
    let outcome = try_extract(source);

    match &outcome {
        Ok(output) => {
            log::info!("{} -> {}", source.display(), output.display());
        }
        Err(error) => {
            log::error!("Failed to process {}: {error}", source.display());
        }
    }

    ExtractionResult {
        source: source.to_path_buf(),
        outcome,
    }
}

fn try_extract(source: &Path) -> Result<PathBuf, FramegrabError> {
    let mut session = DecodeSession::open(source)?;
    let frame = session.first_frame()?;

    let output = output_path_for(source);
    frame.save(&output)?;

    Ok(output)
    // `session` is dropped here — demuxer and decoder are released on this
    // and every early-return path above.
}

fn convert_frame_to_image(
    rgb_frame: &VideoFrame,
    width: u32,
    height: u32,
) -> Result<DynamicImage, FramegrabError> {
    let buffer = frame_to_rgb_buffer(rgb_frame, width, height);

    let image = RgbImage::from_raw(width, height, buffer).ok_or_else(|| {
        FramegrabError::FrameDecode(format!(
            "decoded frame buffer does not match {width}×{height} RGB dimensions"
        ))
    })?;

    Ok(DynamicImage::ImageRgb8(image))
}
