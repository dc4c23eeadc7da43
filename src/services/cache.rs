use dashmap::DashMap;
use std::time::{Duration, Instant};

/// A keyed memo with a fixed time-to-live.
///
/// Entries expire unconditionally once their TTL elapses; there is no manual
/// invalidation and no refresh-on-read. Backed by a [`DashMap`] so the fetch
/// path can share it behind an `Arc` without extra locking.
pub struct Cache<V> {
    entries: DashMap<String, Entry<V>>,
    ttl: Duration,
}

struct Entry<V> {
    value: V,
    stored_at: Instant,
}

impl<V: Clone> Cache<V> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    /// Look up a live entry, dropping it if it has expired.
    pub fn get(&self, key: &str) -> Option<V> {
        let entry = self.entries.get(key)?;
        if entry.stored_at.elapsed() < self.ttl {
            Some(entry.value.clone())
        } else {
            drop(entry);
            self.entries.remove(key);
            None
        }
    }

    /// Store a value, restarting the TTL clock for that key.
    pub fn insert(&self, key: String, value: V) {
        self.entries.insert(
            key,
            Entry {
                value,
                stored_at: Instant::now(),
            },
        );
    }

    /// Number of stored entries, expired ones included until they are read.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_within_ttl() {
        let cache = Cache::new(Duration::from_secs(60));
        cache.insert("2330:6mo:1d".to_string(), 42u32);
        assert_eq!(cache.get("2330:6mo:1d"), Some(42));
        assert_eq!(cache.get("2317:6mo:1d"), None);
    }

    #[test]
    fn test_entry_expires() {
        let cache = Cache::new(Duration::from_millis(10));
        cache.insert("k".to_string(), "v".to_string());
        assert_eq!(cache.get("k"), Some("v".to_string()));

        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(cache.get("k"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_insert_restarts_clock() {
        let cache = Cache::new(Duration::from_millis(40));
        cache.insert("k".to_string(), 1u8);
        std::thread::sleep(Duration::from_millis(25));
        cache.insert("k".to_string(), 2u8);
        std::thread::sleep(Duration::from_millis(25));
        // 50ms after the first insert, but only 25ms after the second.
        assert_eq!(cache.get("k"), Some(2));
        assert_eq!(cache.len(), 1);
    }
}
