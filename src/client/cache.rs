//! Product Cache Module
//!
//! Per-product cache with a fixed expiration window. Stale entries are left in
//! place and overwritten by the next successful fetch.

use std::collections::HashMap;
use std::time::Duration;

use serde::Serialize;
use tokio::time::Instant;

use crate::models::Product;

/// Default expiration window for cached products.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

// == Cache Entry ==
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub product: Product,
    pub fetched_at: Instant,
}

impl CacheEntry {
    /// Valid while `now - fetched_at < ttl`.
    pub fn is_fresh(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.fetched_at) < ttl
    }
}

// == Cache Stats ==
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

impl CacheStats {
    /// hits / (hits + misses), or 0.0 before any lookup.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

// == Product Cache ==
#[derive(Debug)]
pub struct ProductCache {
    entries: HashMap<String, CacheEntry>,
    ttl: Duration,
    hits: u64,
    misses: u64,
}

impl ProductCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            hits: 0,
            misses: 0,
        }
    }

    /// Returns the cached product if it is still fresh at `now`.
    pub fn get(&mut self, id: &str, now: Instant) -> Option<&Product> {
        match self.entries.get(id) {
            Some(entry) if entry.is_fresh(now, self.ttl) => {
                self.hits += 1;
                Some(&entry.product)
            }
            _ => {
                self.misses += 1;
                None
            }
        }
    }

    /// Stores or overwrites the entry for `id`.
    pub fn insert(&mut self, id: impl Into<String>, product: Product, fetched_at: Instant) {
        self.entries.insert(
            id.into(),
            CacheEntry {
                product,
                fetched_at,
            },
        );
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.entries.len(),
        }
    }
}

impl Default for ProductCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_TTL)
    }
}
