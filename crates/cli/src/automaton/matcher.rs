// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The streaming match engine.

use std::collections::VecDeque;

use super::links::{FailureLinks, OutputLinks};
use super::trie::{PatternError, PatternId, PatternTrie, ROOT, StateId};

/// A single match: the 0-based start offset in the text and the id of
/// the pattern found there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Match {
    pub offset: usize,
    pub pattern: PatternId,
}

/// A frozen Aho-Corasick automaton: trie, failure links and output
/// links, built once and shared read-only across match engines.
#[derive(Debug)]
pub struct Automaton {
    trie: PatternTrie,
    failure: FailureLinks,
    output: OutputLinks,
}

impl Automaton {
    /// Run the three construction stages in order: trie, then failure
    /// links, then output links. Fails only on an empty pattern.
    pub fn build<I, S>(patterns: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let trie = PatternTrie::from_patterns(patterns)?;
        let failure = FailureLinks::build(&trie);
        let output = OutputLinks::build(&trie, &failure);
        Ok(Automaton {
            trie,
            failure,
            output,
        })
    }

    pub fn trie(&self) -> &PatternTrie {
        &self.trie
    }

    /// Length in bytes of the pattern with the given id.
    pub fn pattern_len(&self, id: PatternId) -> usize {
        self.trie.pattern(id).len()
    }

    /// Collect every occurrence of every pattern in `text`, including
    /// overlapping occurrences, in no particular order.
    pub fn find_all(&self, text: &[u8]) -> Vec<Match> {
        MatchEngine::new(self, text).collect()
    }
}

/// Streaming matcher over one text.
///
/// Holds only transient scan state (current state id, input offset and
/// a buffer of matches not yet yielded), so any number of engines can
/// run concurrently against one shared [`Automaton`].
pub struct MatchEngine<'a> {
    automaton: &'a Automaton,
    text: &'a [u8],
    state: StateId,
    offset: usize,
    pending: VecDeque<Match>,
}

impl<'a> MatchEngine<'a> {
    pub fn new(automaton: &'a Automaton, text: &'a [u8]) -> Self {
        MatchEngine {
            automaton,
            text,
            state: ROOT,
            offset: 0,
            pending: VecDeque::new(),
        }
    }

    /// Record every pattern accepted at `state` as ending at the
    /// current offset.
    fn emit(&mut self, state: StateId) {
        let automaton = self.automaton;
        for &id in automaton.trie.accepting_ids(state) {
            self.pending.push_back(Match {
                offset: self.offset + 1 - automaton.pattern_len(id),
                pattern: id,
            });
        }
    }

    /// Advance the scan until at least one match is pending or the
    /// text is exhausted.
    ///
    /// The pacing is deliberate: one inner run of edge-following per
    /// outer iteration, `offset` advanced only on a followed edge or
    /// at the root on a dead symbol, and exactly one failure hop after
    /// every inner loop exit (a no-op at the root, and harmlessly
    /// discarded when the inner loop stopped at end of text). The
    /// amortized linear bound depends on this exact shape; skipping
    /// the unconditional hop can stall the scan entirely.
    fn refill(&mut self) {
        let automaton = self.automaton;
        while self.pending.is_empty() && self.offset < self.text.len() {
            while self.offset < self.text.len() {
                let Some(next) = automaton.trie.goto(self.state, self.text[self.offset]) else {
                    break;
                };
                self.state = next;
                self.emit(next);
                // Every hop along the output chain lands on an
                // accepting state, so this walk is paid for by the
                // matches it emits.
                let mut out = automaton.output.get(next);
                while let Some(accepting) = out {
                    self.emit(accepting);
                    out = automaton.output.get(accepting);
                }
                self.offset += 1;
            }
            if self.state == ROOT {
                // No path from the root starts with this symbol, so it
                // cannot begin any match. Skip it.
                self.offset += 1;
            }
            self.state = automaton.failure.get(self.state);
        }
    }
}

impl Iterator for MatchEngine<'_> {
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        if self.pending.is_empty() {
            self.refill();
        }
        self.pending.pop_front()
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
