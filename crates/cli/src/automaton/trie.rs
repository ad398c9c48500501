// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern trie: the goto function over the pattern set.

use std::collections::BTreeMap;

use thiserror::Error;

/// Index of a state in the trie arena. The root is always state 0.
pub type StateId = usize;

/// 1-based pattern identifier, assigned in input order.
pub type PatternId = usize;

/// The root state.
pub const ROOT: StateId = 0;

/// Errors raised while building the trie.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    /// An empty pattern would make the root an accepting state and
    /// match at every offset; it is rejected as a configuration error.
    #[error("pattern {id} is empty")]
    EmptyPattern { id: PatternId },
}

#[derive(Debug, Default)]
struct State {
    /// Child edges, ordered by symbol. Tree edges only; failure and
    /// output transitions live in their own tables.
    edges: BTreeMap<u8, StateId>,
    /// Patterns terminating exactly at this state. Empty for most states.
    accepting: Vec<PatternId>,
}

/// Prefix tree over the pattern set, plus the pattern registry.
///
/// States live in a flat arena indexed by [`StateId`]. A state's parent
/// always has a smaller id, so iterating `0..state_count()` visits
/// parents before children. Built once and immutable afterwards.
#[derive(Debug)]
pub struct PatternTrie {
    states: Vec<State>,
    patterns: Vec<String>,
}

impl PatternTrie {
    /// Build a trie from a pattern set, assigning 1-based pattern ids
    /// in input order. Fails on the first empty pattern; a partially
    /// built trie is never returned.
    pub fn from_patterns<I, S>(patterns: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut trie = PatternTrie {
            states: vec![State::default()],
            patterns: Vec::new(),
        };
        for pattern in patterns {
            trie.insert(pattern.into())?;
        }
        Ok(trie)
    }

    /// Walk the pattern from the root, creating a state wherever the
    /// required edge is absent. Duplicate pattern strings collapse onto
    /// the same final state; every duplicate id stays in its accepting
    /// set and all of them are reported on each occurrence.
    fn insert(&mut self, pattern: String) -> Result<(), PatternError> {
        let id = self.patterns.len() + 1;
        if pattern.is_empty() {
            return Err(PatternError::EmptyPattern { id });
        }
        let mut state = ROOT;
        for &symbol in pattern.as_bytes() {
            let existing = self.states[state].edges.get(&symbol).copied();
            state = match existing {
                Some(child) => child,
                None => {
                    let child = self.states.len();
                    self.states.push(State::default());
                    self.states[state].edges.insert(symbol, child);
                    child
                }
            };
        }
        self.states[state].accepting.push(id);
        self.patterns.push(pattern);
        Ok(())
    }

    /// Child of `state` on `symbol`, if that edge exists.
    pub fn goto(&self, state: StateId, symbol: u8) -> Option<StateId> {
        self.states[state].edges.get(&symbol).copied()
    }

    /// Symbols with an outgoing edge from `state`, in symbol order.
    pub fn edges(&self, state: StateId) -> impl Iterator<Item = u8> + '_ {
        self.states[state].edges.keys().copied()
    }

    /// Pattern ids accepted at `state`.
    pub fn accepting_ids(&self, state: StateId) -> &[PatternId] {
        &self.states[state].accepting
    }

    /// Number of states, root included. States are `0..state_count()`
    /// in creation order.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Number of registered patterns.
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Pattern string for a 1-based id.
    pub fn pattern(&self, id: PatternId) -> &str {
        &self.patterns[id - 1]
    }
}

#[cfg(test)]
#[path = "trie_tests.rs"]
mod tests;
