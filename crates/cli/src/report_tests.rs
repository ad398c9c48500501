// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Unit tests for report formatting.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use similar_asserts::assert_eq;

use super::*;

fn sample_records() -> Vec<MatchRecord> {
    vec![
        MatchRecord {
            offset: 1,
            pattern: 1,
            strand: STRAND_FORWARD,
        },
        MatchRecord {
            offset: 2,
            pattern: 1,
            strand: STRAND_REVERSE,
        },
        MatchRecord {
            offset: 5,
            pattern: 2,
            strand: STRAND_FORWARD,
        },
    ]
}

#[test]
fn text_format_is_offset_pattern_strand_lines() {
    let rendered = format_matches(OutputFormat::Text, &sample_records()).unwrap();
    assert_eq!(rendered, "1 1 1\n2 1 2\n5 2 1\n");
}

#[test]
fn text_format_of_no_matches_is_empty() {
    assert_eq!(format_matches(OutputFormat::Text, &[]).unwrap(), "");
}

#[test]
fn negative_reverse_offsets_render() {
    let records = [MatchRecord {
        offset: -1,
        pattern: 3,
        strand: STRAND_REVERSE,
    }];
    assert_eq!(format_matches(OutputFormat::Text, &records).unwrap(), "-1 3 2\n");
}

#[test]
fn json_format_parses_back() {
    let rendered = format_matches(OutputFormat::Json, &sample_records()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    let records = parsed.as_array().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["offset"], 1);
    assert_eq!(records[0]["pattern"], 1);
    assert_eq!(records[0]["strand"], 1);
    assert_eq!(records[1]["strand"], 2);
}

#[test]
fn record_ordering_is_offset_then_pattern_then_strand() {
    let mut records = vec![
        MatchRecord {
            offset: 2,
            pattern: 1,
            strand: 1,
        },
        MatchRecord {
            offset: 1,
            pattern: 2,
            strand: 1,
        },
        MatchRecord {
            offset: 1,
            pattern: 1,
            strand: 2,
        },
        MatchRecord {
            offset: 1,
            pattern: 1,
            strand: 1,
        },
    ];
    records.sort_unstable();
    let key: Vec<(i64, usize, u8)> = records
        .iter()
        .map(|r| (r.offset, r.pattern, r.strand))
        .collect();
    assert_eq!(key, vec![(1, 1, 1), (1, 1, 2), (1, 2, 1), (2, 1, 1)]);
}
