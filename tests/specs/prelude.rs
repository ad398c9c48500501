//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Returns a Command configured to run the seqscan binary
pub fn seqscan_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("seqscan"))
}

/// Creates a temp directory holding `corpus.txt` and `patterns.txt`.
pub fn scan_fixture(corpus: &str, patterns: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("corpus.txt"), corpus).unwrap();
    std::fs::write(dir.path().join("patterns.txt"), patterns.join("\n")).unwrap();
    dir
}

/// Reads the default match report written inside a fixture directory.
pub fn read_matches(dir: &Path) -> String {
    std::fs::read_to_string(dir.join("matches.txt")).unwrap()
}
