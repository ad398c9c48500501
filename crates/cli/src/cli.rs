//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

/// Exact multi-pattern DNA sequence matching over a text corpus
#[derive(Parser)]
#[command(name = "seqscan")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// DNA corpus file to scan
    #[arg(value_name = "CORPUS_FILE")]
    pub corpus_file: PathBuf,

    /// Pattern file, one pattern per line (blank lines are skipped)
    #[arg(value_name = "PATTERN_FILE")]
    pub pattern_file: PathBuf,

    /// Write matches to this file
    #[arg(short, long, default_value = "matches.txt", value_name = "FILE")]
    pub output: PathBuf,

    /// Output format
    #[arg(long, default_value = "text", value_name = "FORMAT")]
    pub format: OutputFormat,

    /// Skip the reverse-complement strand
    #[arg(long)]
    pub no_comp: bool,

    /// Read a precomputed reverse complement from this file instead of
    /// computing it
    #[arg(long, value_name = "FILE")]
    pub comp_file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
