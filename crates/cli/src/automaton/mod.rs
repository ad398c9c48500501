// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Aho-Corasick multi-pattern matching engine.
//!
//! Construction runs in three strictly ordered stages: the pattern trie
//! (goto function), then failure links, then output links. Each stage
//! needs the previous one fully complete before it starts. The frozen
//! result is immutable and can be shared read-only by any number of
//! concurrent match engines.

mod links;
mod matcher;
mod trie;

pub use links::{FailureLinks, OutputLinks};
pub use matcher::{Automaton, Match, MatchEngine};
pub use trie::{PatternError, PatternId, PatternTrie, ROOT, StateId};
