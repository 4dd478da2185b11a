//! Transient per-run synthesis state.
//!
//! An explicit value object threaded through the greedy loop instead of
//! shared mutable state, so parameter sweeps can run sessions independently.
//! The used-connection set is a hash set over the canonical `(min, max)` key:
//! peg counts may reach the thousands while actual connections stay sparse.

use crate::types::normalized_key;
use std::collections::{HashMap, HashSet};

#[derive(Clone, Debug)]
pub struct SynthSession {
    /// Peg the walk currently stands on.
    pub current: usize,
    used_keys: HashSet<(usize, usize)>,
    usage: HashMap<usize, u32>,
}

impl SynthSession {
    pub fn new(start: usize) -> Self {
        Self {
            current: start,
            used_keys: HashSet::new(),
            usage: HashMap::new(),
        }
    }

    /// Whether the unordered pair `(a, b)` has already been threaded.
    #[inline]
    pub fn is_used(&self, a: usize, b: usize) -> bool {
        self.used_keys.contains(&normalized_key(a, b))
    }

    /// How many accepted connections touch `peg`.
    #[inline]
    pub fn usage_count(&self, peg: usize) -> u32 {
        self.usage.get(&peg).copied().unwrap_or(0)
    }

    /// Record an accepted connection and advance the walk to `to`.
    pub fn accept(&mut self, from: usize, to: usize) {
        self.used_keys.insert(normalized_key(from, to));
        *self.usage.entry(from).or_insert(0) += 1;
        *self.usage.entry(to).or_insert(0) += 1;
        self.current = to;
    }
}
