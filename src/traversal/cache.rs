//! Per-synset memoization cache.
//!
//! The taxonomy is immutable, so every derived quantity (depth, descendant
//! count, information content) is a pure function of the synset identifier
//! and can be memoized forever. [`MemoCache`] wraps a hash map in a
//! `parking_lot::RwLock`: reads are cheap, and concurrent first-time
//! computations of the same key are redundant but convergent: both writers
//! store the identical value, so no per-key locking is needed for
//! correctness.

use ahash::AHashMap;
use parking_lot::RwLock;

/// A grow-only memoization cache keyed by synset identifier.
#[derive(Debug, Default)]
pub struct MemoCache<V: Clone> {
    entries: RwLock<AHashMap<String, V>>,
}

impl<V: Clone> MemoCache<V> {
    /// Create an empty cache.
    pub fn new() -> Self {
        MemoCache {
            entries: RwLock::new(AHashMap::new()),
        }
    }

    /// Look up a cached value.
    pub fn get(&self, key: &str) -> Option<V> {
        self.entries.read().get(key).cloned()
    }

    /// Return the cached value for `key`, computing and storing it on a miss.
    ///
    /// `compute` runs outside the lock; if two threads race on the same key
    /// they both compute the same value and the second write is a no-op in
    /// effect.
    pub fn get_or_insert_with<F>(&self, key: &str, compute: F) -> V
    where
        F: FnOnce() -> V,
    {
        if let Some(value) = self.entries.read().get(key) {
            return value.clone();
        }
        let value = compute();
        self.entries
            .write()
            .insert(key.to_string(), value.clone());
        value
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
