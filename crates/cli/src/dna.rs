// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! DNA reverse-complement transform.

use thiserror::Error;

/// Errors raised by the reverse-complement transform.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DnaError {
    /// Symbol outside the lowercase `acgt` alphabet.
    #[error("invalid symbol {symbol:?} at offset {offset} (expected one of a, c, g, t)")]
    InvalidSymbol { symbol: char, offset: usize },
}

/// Map `a↔t`, `c↔g` over the text, then reverse it.
///
/// Input must be drawn from the lowercase `acgt` alphabet; anything
/// else (including uppercase bases and whitespace) is rejected, never
/// silently mapped. Applying the transform twice returns the original
/// string.
pub fn reverse_complement(text: &str) -> Result<String, DnaError> {
    let mut complemented = String::with_capacity(text.len());
    for (offset, symbol) in text.chars().enumerate() {
        match symbol {
            'a' => complemented.push('t'),
            't' => complemented.push('a'),
            'c' => complemented.push('g'),
            'g' => complemented.push('c'),
            _ => return Err(DnaError::InvalidSymbol { symbol, offset }),
        }
    }
    Ok(complemented.chars().rev().collect())
}

#[cfg(test)]
#[path = "dna_tests.rs"]
mod tests;
