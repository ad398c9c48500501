//! Unit tests for CLI argument parsing.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::path::PathBuf;

use clap::Parser;

use super::*;

#[test]
fn positional_arguments_and_defaults() {
    let cli = Cli::try_parse_from(["seqscan", "corpus.txt", "patterns.txt"]).unwrap();
    assert_eq!(cli.corpus_file, PathBuf::from("corpus.txt"));
    assert_eq!(cli.pattern_file, PathBuf::from("patterns.txt"));
    assert_eq!(cli.output, PathBuf::from("matches.txt"));
    assert_eq!(cli.format, OutputFormat::Text);
    assert!(!cli.no_comp);
    assert!(cli.comp_file.is_none());
    assert!(!cli.verbose);
}

#[test]
fn missing_positionals_fail() {
    assert!(Cli::try_parse_from(["seqscan"]).is_err());
    assert!(Cli::try_parse_from(["seqscan", "corpus.txt"]).is_err());
}

#[test]
fn output_and_format_flags() {
    let cli = Cli::try_parse_from([
        "seqscan",
        "c.txt",
        "p.txt",
        "-o",
        "out.txt",
        "--format",
        "json",
    ])
    .unwrap();
    assert_eq!(cli.output, PathBuf::from("out.txt"));
    assert_eq!(cli.format, OutputFormat::Json);
}

#[test]
fn strand_flags() {
    let cli = Cli::try_parse_from(["seqscan", "c.txt", "p.txt", "--no-comp"]).unwrap();
    assert!(cli.no_comp);

    let cli =
        Cli::try_parse_from(["seqscan", "c.txt", "p.txt", "--comp-file", "rc.txt"]).unwrap();
    assert_eq!(cli.comp_file, Some(PathBuf::from("rc.txt")));
}

#[test]
fn verbose_short_and_long() {
    assert!(
        Cli::try_parse_from(["seqscan", "c.txt", "p.txt", "-v"])
            .unwrap()
            .verbose
    );
    assert!(
        Cli::try_parse_from(["seqscan", "c.txt", "p.txt", "--verbose"])
            .unwrap()
            .verbose
    );
}

#[test]
fn unknown_format_fails() {
    assert!(Cli::try_parse_from(["seqscan", "c.txt", "p.txt", "--format", "xml"]).is_err());
}
