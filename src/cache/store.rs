//! Cache Store Module
//!
//! Response cache keyed by string with a per-entry TTL. Expiry is detected
//! lazily on read; [`TtlCache::purge_expired`] is the only eager path.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, DEFAULT_TTL_MS};
use crate::clock::{Clock, SystemClock};

// == TTL Cache ==
/// In-memory response cache with per-entry expiration.
///
/// The cache does no locking of its own. Share it between tasks behind an
/// `Arc<tokio::sync::RwLock<_>>` as the HTTP layer does.
#[derive(Debug)]
pub struct TtlCache<V, C: Clock = SystemClock> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Performance statistics
    stats: CacheStats,
    /// TTL in milliseconds for entries stored without an explicit one
    default_ttl_ms: u64,
    /// Time source for creation stamps and expiry checks
    clock: C,
}

impl<V> TtlCache<V, SystemClock> {
    // == Constructor ==
    /// Creates an empty cache on the wall clock with a 60 second default TTL.
    pub fn new() -> Self {
        Self::with_default_ttl(DEFAULT_TTL_MS)
    }

    /// Creates an empty cache on the wall clock with the given default TTL.
    pub fn with_default_ttl(default_ttl_ms: u64) -> Self {
        Self::with_clock(default_ttl_ms, SystemClock)
    }
}

impl<V> Default for TtlCache<V, SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, C: Clock> TtlCache<V, C> {
    /// Creates an empty cache reading time from `clock`.
    pub fn with_clock(default_ttl_ms: u64, clock: C) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            default_ttl_ms,
            clock,
        }
    }

    /// TTL applied when `set` is called without one.
    pub fn default_ttl_ms(&self) -> u64 {
        self.default_ttl_ms
    }

    // == Set ==
    /// Stores `value` under `key`, replacing any previous entry.
    ///
    /// The replacement is a new entry: its creation time is now, so a `set`
    /// on a stale key makes it fresh again with the new TTL.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    /// * `ttl_ms` - TTL in milliseconds (uses the default TTL if None)
    pub fn set(&mut self, key: impl Into<String>, value: V, ttl_ms: Option<u64>) {
        let ttl_ms = ttl_ms.unwrap_or(self.default_ttl_ms);
        let entry = CacheEntry::new(value, self.clock.now_ms(), ttl_ms);

        self.entries.insert(key.into(), entry);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Returns the value under `key` if present and fresh.
    ///
    /// An expired entry is removed and reported as absent. The value is
    /// returned by reference; callers that need ownership clone it.
    pub fn get(&mut self, key: &str) -> Option<&V> {
        let now = self.clock.now_ms();

        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired(now),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if expired {
            self.entries.remove(key);
            self.stats.record_expiration();
            self.stats.record_miss();
            self.stats.set_total_entries(self.entries.len());
            debug!(key, "Evicted expired cache entry");
            return None;
        }

        self.stats.record_hit();
        self.entries.get(key).map(|entry| &entry.value)
    }

    /// Returns the fresh value under `key`, storing `f()` first on a miss.
    pub fn get_or_insert_with<F>(&mut self, key: impl Into<String>, ttl_ms: Option<u64>, f: F) -> &V
    where
        F: FnOnce() -> V,
    {
        let now = self.clock.now_ms();
        let ttl_ms = ttl_ms.unwrap_or(self.default_ttl_ms);
        let len = self.entries.len();

        match self.entries.entry(key.into()) {
            Entry::Occupied(mut occupied) => {
                if occupied.get().is_expired(now) {
                    occupied.insert(CacheEntry::new(f(), now, ttl_ms));
                    self.stats.record_expiration();
                    self.stats.record_miss();
                } else {
                    self.stats.record_hit();
                }
                &occupied.into_mut().value
            }
            Entry::Vacant(vacant) => {
                self.stats.record_miss();
                self.stats.set_total_entries(len + 1);
                &vacant.insert(CacheEntry::new(f(), now, ttl_ms)).value
            }
        }
    }

    // == Contains ==
    /// True if `key` holds a fresh entry. Does not evict or touch statistics.
    pub fn contains_key(&self, key: &str) -> bool {
        let now = self.clock.now_ms();
        self.entries
            .get(key)
            .is_some_and(|entry| !entry.is_expired(now))
    }

    // == Delete ==
    /// Removes the entry under `key`, fresh or not.
    ///
    /// Returns whether anything was removed; deleting a missing key is a no-op.
    pub fn delete(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Clear ==
    /// Removes every entry regardless of TTL.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats.set_total_entries(0);
    }

    // == Purge Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn purge_expired(&mut self) -> usize {
        let now = self.clock.now_ms();
        let before = self.entries.len();

        self.entries.retain(|_, entry| !entry.is_expired(now));

        let removed = before - self.entries.len();
        for _ in 0..removed {
            self.stats.record_expiration();
        }
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Number of stored entries, including expired ones not yet evicted.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
