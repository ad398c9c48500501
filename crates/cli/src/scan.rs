//! Scan orchestration: read inputs, build the automaton, match both
//! strands, and write the report.
//!
//! The forward corpus and its reverse complement are independent texts,
//! so they are matched in parallel against the shared frozen automaton.

use std::fs;
use std::time::Instant;

use anyhow::Context;

use crate::automaton::Automaton;
use crate::cli::Cli;
use crate::dna;
use crate::file_reader::FileContent;
use crate::report::{self, MatchRecord, STRAND_FORWARD, STRAND_REVERSE};
use crate::verbose::VerboseLogger;

pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let log = VerboseLogger::new(cli.verbose);

    log.section("Reading inputs");
    log.log(&format!("corpus: {}", cli.corpus_file.display()));
    let corpus_content = FileContent::read(&cli.corpus_file).with_context(|| {
        format!("failed to read corpus file {}", cli.corpus_file.display())
    })?;
    let corpus = trim_trailing_newline(corpus_content.as_bytes());

    log.log(&format!("patterns: {}", cli.pattern_file.display()));
    let pattern_content = FileContent::read(&cli.pattern_file).with_context(|| {
        format!("failed to read pattern file {}", cli.pattern_file.display())
    })?;
    let pattern_text = pattern_content
        .as_str()
        .context("pattern file is not valid UTF-8")?;
    let patterns = parse_patterns(pattern_text);
    tracing::debug!(count = patterns.len(), "parsed patterns");
    if log.is_enabled() {
        log.log("searching for the following patterns:");
        for pattern in &patterns {
            log.log(pattern);
        }
    }

    log.section("Building automaton");
    let automaton = Automaton::build(patterns).context("invalid pattern set")?;
    tracing::debug!(
        states = automaton.trie().state_count(),
        patterns = automaton.trie().pattern_count(),
        "automaton built"
    );
    log.log(&format!("{} states", automaton.trie().state_count()));

    let reverse = if cli.no_comp {
        None
    } else {
        Some(load_reverse_complement(cli, corpus, &log)?)
    };

    log.section("Matching");
    let start = Instant::now();
    let (forward_matches, reverse_matches) = rayon::join(
        || automaton.find_all(corpus),
        || reverse.as_ref().map(|text| automaton.find_all(text.as_bytes())),
    );
    let elapsed = start.elapsed();
    log.log(&format!("forward strand: {} matches", forward_matches.len()));

    let mut records: Vec<MatchRecord> = forward_matches
        .iter()
        .map(|m| MatchRecord {
            offset: m.offset as i64 + 1,
            pattern: m.pattern,
            strand: STRAND_FORWARD,
        })
        .collect();
    if let (Some(matches), Some(text)) = (reverse_matches, reverse.as_ref()) {
        log.log(&format!("reverse strand: {} matches", matches.len()));
        let len = text.len() as i64;
        records.extend(matches.iter().map(|m| MatchRecord {
            // Reference coordinate mapping for the reverse strand.
            offset: len - m.offset as i64 - 2,
            pattern: m.pattern,
            strand: STRAND_REVERSE,
        }));
    }
    records.sort_unstable();

    println!(
        "Finished! Matching took {:.6} seconds",
        elapsed.as_secs_f64()
    );

    let rendered = report::format_matches(cli.format, &records)?;
    fs::write(&cli.output, rendered)
        .with_context(|| format!("failed to write output file {}", cli.output.display()))?;
    log.log(&format!("wrote {}", cli.output.display()));
    Ok(())
}

/// Obtain the reverse-complement strand: from `--comp-file` when given
/// and present, otherwise computed from the corpus. Symbols outside the
/// `acgt` alphabet are a fatal error, never silently mapped.
fn load_reverse_complement(
    cli: &Cli,
    corpus: &[u8],
    log: &VerboseLogger,
) -> anyhow::Result<String> {
    if let Some(path) = &cli.comp_file
        && path.exists()
    {
        log.log(&format!("reading precomputed complement {}", path.display()));
        let content = fs::read_to_string(path).with_context(|| {
            format!("failed to read complement file {}", path.display())
        })?;
        let trimmed = content.strip_suffix('\n').unwrap_or(&content);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        return Ok(trimmed.to_string());
    }
    log.log("computing reverse complement");
    let text = std::str::from_utf8(corpus).context("corpus is not valid UTF-8")?;
    Ok(dna::reverse_complement(text)?)
}

/// One pattern per line, blank lines skipped, lowercased before they
/// reach the trie (the corpus itself is not case-normalized).
fn parse_patterns(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.is_empty())
        .map(|line| line.to_lowercase())
        .collect()
}

/// Strip a single trailing line break so a POSIX final newline does
/// not count as corpus symbols.
fn trim_trailing_newline(text: &[u8]) -> &[u8] {
    let text = text.strip_suffix(b"\n").unwrap_or(text);
    text.strip_suffix(b"\r").unwrap_or(text)
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
