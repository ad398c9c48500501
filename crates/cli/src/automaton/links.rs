// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Failure and output link construction over a frozen trie.
//!
//! Both tables are computed by breadth-first traversal, which processes
//! states in non-decreasing trie depth. That ordering is load-bearing:
//! a state's failure link is derived from its parent's (one level
//! shallower, already resolved), and a state's output link from its
//! failure state's (strictly shallower, already resolved).

use std::collections::VecDeque;

use super::trie::{PatternTrie, ROOT, StateId};

/// Work item for the failure pass: a state together with the parent
/// and symbol it was reached through.
struct Pending {
    state: StateId,
    parent: StateId,
    symbol: u8,
}

/// One failure link per state, indexed by state id.
///
/// `failure(root) = root` is an explicit sentinel (`links[0] == 0`);
/// every other entry points to a state of strictly smaller depth, so
/// failure chains always terminate at the root.
#[derive(Debug)]
pub struct FailureLinks {
    links: Vec<StateId>,
}

impl FailureLinks {
    /// Compute failure links for every state of `trie`.
    ///
    /// This is a total function of a well-formed trie; it cannot fail.
    pub fn build(trie: &PatternTrie) -> Self {
        let mut links = vec![ROOT; trie.state_count()];
        let mut queue = VecDeque::new();
        for symbol in trie.edges(ROOT) {
            if let Some(child) = trie.goto(ROOT, symbol) {
                queue.push_back(Pending {
                    state: child,
                    parent: ROOT,
                    symbol,
                });
            }
        }

        while let Some(Pending {
            state,
            parent,
            symbol,
        }) = queue.pop_front()
        {
            // Follow the parent's failure chain until a state with an
            // edge for this symbol appears, or the root is reached.
            let mut r = links[parent];
            while r != ROOT && trie.goto(r, symbol).is_none() {
                r = links[r];
            }
            links[state] = match trie.goto(r, symbol) {
                Some(child) if child != state => child,
                _ => ROOT,
            };
            for sym in trie.edges(state) {
                if let Some(child) = trie.goto(state, sym) {
                    queue.push_back(Pending {
                        state: child,
                        parent: state,
                        symbol: sym,
                    });
                }
            }
        }

        FailureLinks { links }
    }

    /// Failure state for `state`.
    pub fn get(&self, state: StateId) -> StateId {
        self.links[state]
    }
}

/// One optional output link per state: the nearest proper
/// failure-chain ancestor with a non-empty accepting set.
///
/// Precomputing the whole suffix chain of accepting states into a
/// single pointer lets the matcher collect every accepting pattern at
/// a position without walking non-accepting failure states.
#[derive(Debug)]
pub struct OutputLinks {
    links: Vec<Option<StateId>>,
}

impl OutputLinks {
    /// Compute output links in a second breadth-first pass over all
    /// non-root states. Requires the completed [`FailureLinks`].
    pub fn build(trie: &PatternTrie, failure: &FailureLinks) -> Self {
        let mut links: Vec<Option<StateId>> = vec![None; trie.state_count()];
        let mut queue = VecDeque::new();
        for symbol in trie.edges(ROOT) {
            if let Some(child) = trie.goto(ROOT, symbol) {
                queue.push_back(child);
            }
        }

        while let Some(state) = queue.pop_front() {
            let f = failure.get(state);
            links[state] = if trie.accepting_ids(f).is_empty() {
                // `f` is strictly shallower than `state`, so its own
                // link is already resolved.
                links[f]
            } else {
                Some(f)
            };
            for symbol in trie.edges(state) {
                if let Some(child) = trie.goto(state, symbol) {
                    queue.push_back(child);
                }
            }
        }

        OutputLinks { links }
    }

    /// Output state for `state`, if any.
    pub fn get(&self, state: StateId) -> Option<StateId> {
        self.links[state]
    }
}

#[cfg(test)]
#[path = "links_tests.rs"]
mod tests;
