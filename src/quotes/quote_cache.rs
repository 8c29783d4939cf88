//! Explicit TTL cache for fetched market data.
//!
//! Replaces the dashboards' process-wide single-slot cache: entries are
//! keyed by request symbol and carry their own expiry timestamp, and the
//! service refreshes on miss or expiry.

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;

struct CacheEntry<V> {
    value: V,
    expires_at: DateTime<Utc>,
}

/// Time-bounded cache keyed by symbol.
pub struct TtlCache<V> {
    entries: DashMap<String, CacheEntry<V>>,
    ttl: Duration,
}

impl<V: Clone> TtlCache<V> {
    pub fn new(ttl_secs: u64) -> Self {
        Self {
            entries: DashMap::new(),
            ttl: Duration::seconds(ttl_secs as i64),
        }
    }

    /// Returns the cached value, or `None` on miss or expiry.
    /// Expired entries are evicted on access.
    pub fn get(&self, key: &str) -> Option<V> {
        let expired = match self.entries.get(key) {
            Some(entry) if entry.expires_at > Utc::now() => return Some(entry.value.clone()),
            Some(_) => true,
            None => false,
        };
        if expired {
            self.entries.remove(key);
        }
        None
    }

    /// Stores a value, stamping it with the cache's TTL.
    pub fn insert(&self, key: &str, value: V) {
        self.entries.insert(
            key.to_string(),
            CacheEntry {
                value,
                expires_at: Utc::now() + self.ttl,
            },
        );
    }

    pub fn invalidate(&self, key: &str) {
        self.entries.remove(key);
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_after_insert() {
        let cache: TtlCache<u32> = TtlCache::new(60);
        cache.insert("1120.SR", 7);
        assert_eq!(cache.get("1120.SR"), Some(7));
        assert_eq!(cache.entry_count(), 1);
    }

    #[test]
    fn miss_on_unknown_key() {
        let cache: TtlCache<u32> = TtlCache::new(60);
        assert_eq!(cache.get("2222.SR"), None);
    }

    #[test]
    fn expired_entry_is_evicted() {
        let cache: TtlCache<u32> = TtlCache::new(0);
        cache.insert("1120.SR", 7);
        assert_eq!(cache.get("1120.SR"), None);
        assert_eq!(cache.entry_count(), 0);
    }

    #[test]
    fn invalidate_removes_entry() {
        let cache: TtlCache<u32> = TtlCache::new(60);
        cache.insert("1120.SR", 7);
        cache.invalidate("1120.SR");
        assert_eq!(cache.get("1120.SR"), None);
    }

    #[test]
    fn clear_removes_everything() {
        let cache: TtlCache<u32> = TtlCache::new(60);
        cache.insert("1120.SR", 7);
        cache.insert("2222.SR", 9);
        cache.clear();
        assert_eq!(cache.entry_count(), 0);
    }
}
