//! Per-file extraction integration tests.
//!
//! Tests against real video data are guarded by fixture existence checks so
//! the suite passes on checkouts without `tests/fixtures/`.

use std::path::Path;

use framegrab::{DecodeSession, extract_first_frame, output_path_for};

#[test]
fn output_path_replaces_extension() {
    let output = output_path_for(Path::new("/videos/holiday.mp4"));
    assert_eq!(output, Path::new("/videos/holiday_first_frame.png"));
}

#[test]
fn output_path_keeps_inner_dots() {
    let output = output_path_for(Path::new("clips/take.2.mkv"));
    assert_eq!(output, Path::new("clips/take.2_first_frame.png"));
}

#[test]
fn output_path_sits_beside_source() {
    let source = Path::new("/a/b/c/clip.WMV");
    let output = output_path_for(source);
    assert_eq!(output.parent(), source.parent());
}

#[test]
fn open_nonexistent_file() {
    let result = DecodeSession::open("this_file_does_not_exist.mp4");
    assert!(result.is_err());

    let error_message = result.unwrap_err().to_string();
    assert!(
        error_message.contains("Failed to open video file"),
        "Error message should mention file open failure: {error_message}",
    );
}

#[test]
fn garbage_file_fails_without_output() {
    let directory = tempfile::tempdir().expect("Failed to create temp dir");
    let source = directory.path().join("not_really.mp4");
    std::fs::write(&source, b"this is not a media file").expect("Failed to write garbage file");

    let result = extract_first_frame(&source);

    assert!(!result.is_success());
    assert!(result.output_path().is_none());
    assert!(
        !output_path_for(&source).exists(),
        "a failed extraction must not leave an output file",
    );
}

#[test]
fn zero_length_file_fails_without_output() {
    let directory = tempfile::tempdir().expect("Failed to create temp dir");
    let source = directory.path().join("empty.avi");
    std::fs::write(&source, b"").expect("Failed to write empty file");

    let result = extract_first_frame(&source);

    assert!(!result.is_success());
    assert!(!output_path_for(&source).exists());
}

#[test]
fn extracts_first_frame_from_fixture() {
    let fixture = Path::new("tests/fixtures/sample_video.mp4");
    if !fixture.exists() {
        return;
    }

    let directory = tempfile::tempdir().expect("Failed to create temp dir");
    let source = directory.path().join("sample.mp4");
    std::fs::copy(fixture, &source).expect("Failed to copy fixture");

    let result = extract_first_frame(&source);
    assert!(result.is_success(), "extraction failed: {:?}", result.outcome);

    let output = result.output_path().expect("success must carry a path");
    assert_eq!(output, output_path_for(&source));

    // The output must be a decodable PNG with the stream's dimensions.
    let written = image::open(output).expect("output is not a valid image");
    assert!(written.width() > 0 && written.height() > 0);
}

#[test]
fn rerun_overwrites_previous_output() {
    let fixture = Path::new("tests/fixtures/sample_video.mp4");
    if !fixture.exists() {
        return;
    }

    let directory = tempfile::tempdir().expect("Failed to create temp dir");
    let source = directory.path().join("sample.mp4");
    std::fs::copy(fixture, &source).expect("Failed to copy fixture");

    let output = output_path_for(&source);
    std::fs::write(&output, b"stale placeholder").expect("Failed to plant stale output");

    let result = extract_first_frame(&source);
    assert!(result.is_success());

    let first_pass = std::fs::read(&output).expect("Failed to read output");
    assert_ne!(first_pass, b"stale placeholder");

    // Second pass is deterministic: same bytes, no collision handling.
    let result = extract_first_frame(&source);
    assert!(result.is_success());
    let second_pass = std::fs::read(&output).expect("Failed to read output");
    assert_eq!(first_pass, second_pass);
}
