//! Memoized query results, keyed by normalized input.
//!
//! The map is unbounded and has no eviction: entries live as long as the
//! cache does. Two concurrent misses on the same key both compute and the
//! last insert wins; the values are identical so nothing is lost.

use dashmap::DashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Hit and miss counters since the cache was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
    pub entries: usize,
}

#[derive(Debug, Default)]
pub struct ResultCache {
    entries: DashMap<String, Arc<[String]>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl ResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the sorted matches for a normalized query.
    pub fn get(&self, key: &str) -> Option<Arc<[String]>> {
        match self.entries.get(key) {
            Some(entry) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                log::debug!("cache hit for '{key}'");
                Some(Arc::clone(entry.value()))
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                log::debug!("cache miss for '{key}'");
                None
            }
        }
    }

    pub fn put(&self, key: String, words: Arc<[String]>) {
        self.entries.insert(key, words);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.entries.len(),
        }
    }
}
