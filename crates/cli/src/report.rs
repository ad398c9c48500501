// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Match report formatting.
//!
//! The reference text format is whitespace-separated
//! `offset patternId strand` lines; a JSON rendering of the same
//! records is available with `--format json`.

use std::fmt::Write;

use serde::Serialize;

use crate::automaton::PatternId;
use crate::cli::OutputFormat;

/// Forward strand code in report output.
pub const STRAND_FORWARD: u8 = 1;
/// Reverse-complement strand code in report output.
pub const STRAND_REVERSE: u8 = 2;

/// One reported match in output coordinates.
///
/// Offsets are 1-based on the forward strand. Reverse-strand offsets
/// use the mapping `len - offset - 2` from reverse-complement
/// coordinates, which can go below zero for single-base patterns near
/// the ends; they are signed for that reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct MatchRecord {
    pub offset: i64,
    pub pattern: PatternId,
    pub strand: u8,
}

/// Render records in the requested format. Records are written in the
/// order given; sorting ascending by `(offset, pattern, strand)` is
/// the caller's job.
pub fn format_matches(format: OutputFormat, records: &[MatchRecord]) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => format_text(records),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(records)?;
            out.push('\n');
            Ok(out)
        }
    }
}

fn format_text(records: &[MatchRecord]) -> anyhow::Result<String> {
    let mut out = String::new();
    for record in records {
        writeln!(out, "{} {} {}", record.offset, record.pattern, record.strand)?;
    }
    Ok(out)
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
