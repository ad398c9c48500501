//! Shared unit test utilities.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::io::Write;

use tempfile::{NamedTempFile, TempDir};

/// Creates a temp file with the given content for testing.
///
/// Returns the NamedTempFile which keeps the file alive.
pub fn temp_file_with_content(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}

/// Creates a temp directory holding a corpus file and a pattern file,
/// named `corpus.txt` and `patterns.txt`.
pub fn temp_scan_dir(corpus: &str, patterns: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("corpus.txt"), corpus).unwrap();
    fs::write(dir.path().join("patterns.txt"), patterns.join("\n")).unwrap();
    dir
}
