//! Caller-owned memoization of file classifications.

use super::classify::{FileReview, classify_snapshots};
use super::snapshots::ThreeWaySnapshotSet;
use lru::LruCache;
use std::num::NonZeroUsize;

pub const DEFAULT_CAPACITY: usize = 32;

/// LRU of classification results keyed by snapshot content.
///
/// Returns exactly what [`classify_snapshots`] would; a hit only skips the work.
pub struct ReviewCache {
    entries: LruCache<u64, FileReview>,
    hits: u64,
    misses: u64,
}

impl ReviewCache {
    /// Creates a cache holding up to `capacity` files (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
            hits: 0,
            misses: 0,
        }
    }

    pub fn classify(&mut self, set: &ThreeWaySnapshotSet) -> FileReview {
        let key = set.fingerprint();
        if let Some(review) = self.entries.get(&key) {
            self.hits += 1;
            log::trace!("Review cache hit for {key:016x}");
            return review.clone();
        }

        self.misses += 1;
        let review = classify_snapshots(set);
        self.entries.put(key, review.clone());
        review
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// `(hits, misses)` since creation.
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }
}

impl Default for ReviewCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
