//! Discovery integration tests.
//!
//! Discovery is purely lexical and non-recursive; these tests pin down the
//! suffix set, case handling, subdirectory skipping, and ordering.

use std::fs;
use std::path::Path;

use framegrab::{discover_videos, is_video_candidate};

fn touch(path: &Path) {
    fs::write(path, b"").expect("Failed to create test file");
}

#[test]
fn filters_by_video_extension() {
    let directory = tempfile::tempdir().expect("Failed to create temp dir");
    let root = directory.path();

    touch(&root.join("clip.mp4"));
    touch(&root.join("movie.mkv"));
    touch(&root.join("notes.txt"));
    touch(&root.join("archive.mp4.bak"));
    touch(&root.join("music.mp3"));

    let candidates = discover_videos(root).expect("Discovery failed");
    let names: Vec<_> = candidates
        .iter()
        .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();

    assert_eq!(names, vec!["clip.mp4", "movie.mkv"]);
}

#[test]
fn extension_match_is_case_insensitive() {
    let directory = tempfile::tempdir().expect("Failed to create temp dir");
    let root = directory.path();

    touch(&root.join("upper.MP4"));
    touch(&root.join("mixed.MoV"));
    touch(&root.join("lower.avi"));

    let candidates = discover_videos(root).expect("Discovery failed");
    assert_eq!(candidates.len(), 3);
}

#[test]
fn skips_subdirectories() {
    let directory = tempfile::tempdir().expect("Failed to create temp dir");
    let root = directory.path();

    // A subdirectory whose name carries a video suffix must not be listed,
    // and its contents must not be scanned.
    let nested = root.join("season1.mp4");
    fs::create_dir(&nested).expect("Failed to create subdirectory");
    touch(&nested.join("episode.mkv"));

    touch(&root.join("top_level.wmv"));

    let candidates = discover_videos(root).expect("Discovery failed");
    assert_eq!(candidates.len(), 1);
    assert!(candidates[0].ends_with("top_level.wmv"));
}

#[test]
fn returns_sorted_order() {
    let directory = tempfile::tempdir().expect("Failed to create temp dir");
    let root = directory.path();

    touch(&root.join("charlie.mp4"));
    touch(&root.join("alpha.flv"));
    touch(&root.join("bravo.avi"));

    let candidates = discover_videos(root).expect("Discovery failed");
    let names: Vec<_> = candidates
        .iter()
        .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();

    assert_eq!(names, vec!["alpha.flv", "bravo.avi", "charlie.mp4"]);
}

#[test]
fn empty_directory_yields_no_candidates() {
    let directory = tempfile::tempdir().expect("Failed to create temp dir");

    let candidates = discover_videos(directory.path()).expect("Discovery failed");
    assert!(candidates.is_empty());
}

#[test]
fn candidate_check_covers_suffix_set() {
    for name in [
        "a.mp4", "a.avi", "a.mov", "a.mkv", "a.wmv", "a.flv", "a.MKV",
    ] {
        assert!(is_video_candidate(Path::new(name)), "expected match: {name}");
    }

    for name in ["a.mp3", "a.webm", "a.txt", "mp4", "a", "a.mp4.part"] {
        assert!(!is_video_candidate(Path::new(name)), "unexpected match: {name}");
    }
}
