//! Subproblem cache used by the top-down strategies.
//!
//! Each problem keys its cache by subproblem identity: the bare index for
//! the scalar recurrence, an index pair for the two-dimensional problems.
//! The trait exists so the cache can be injected: callers may pass their own
//! storage to a `*_memoized_with` entry point, and tests can observe what a
//! strategy actually cached.
//!
//! A memo is tied to one problem instance. Reusing one across calls that
//! solve the *same* instance is sound and skips recomputation; reusing it
//! across different instances poisons the cache, because keys identify
//! subproblems, not instances.

use std::collections::HashMap;
use std::hash::Hash;

/// Key-value cache for solved subproblems.
///
/// Subproblem values are referentially transparent: once a key has been
/// written, any later write for the same key must carry the same value.
pub trait Memo<K, V> {
    /// Look up a previously solved subproblem.
    fn get(&self, key: &K) -> Option<V>;

    /// Record a solved subproblem.
    fn insert(&mut self, key: K, value: V);
}

/// Hash-map backed [`Memo`], the default cache for every top-down strategy.
#[derive(Debug, Clone, Default)]
pub struct HashMemo<K, V> {
    map: HashMap<K, V>,
}

impl<K: Eq + Hash, V> HashMemo<K, V> {
    /// Create an empty memo.
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Number of solved subproblems currently cached.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<K: Eq + Hash, V: Copy + PartialEq + std::fmt::Debug> Memo<K, V> for HashMemo<K, V> {
    fn get(&self, key: &K) -> Option<V> {
        self.map.get(key).copied()
    }

    fn insert(&mut self, key: K, value: V) {
        let previous = self.map.insert(key, value);
        debug_assert!(
            previous.is_none() || previous == Some(value),
            "memo entry rewritten with a different value: {previous:?} -> {value:?}"
        );
    }
}
