//! Freshness-window cache for fetched records

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::hash::Hash;

/// How long a fetched record is served without refetching
pub fn default_stale_time() -> Duration {
    Duration::minutes(5)
}

#[derive(Debug, Clone)]
struct Entry<V> {
    value: V,
    fetched_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct QueryCache<K, V> {
    entries: HashMap<K, Entry<V>>,
    stale_time: Duration,
}

impl<K: Eq + Hash, V> Default for QueryCache<K, V> {
    fn default() -> Self {
        Self::new(default_stale_time())
    }
}

impl<K: Eq + Hash, V> QueryCache<K, V> {
    pub fn new(stale_time: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stale_time,
        }
    }

    /// Cached value if it is still fresh at `now`
    pub fn get(&self, key: &K, now: DateTime<Utc>) -> Option<&V> {
        self.entries
            .get(key)
            .filter(|entry| now.signed_duration_since(entry.fetched_at) < self.stale_time)
            .map(|entry| &entry.value)
    }

    pub fn insert(&mut self, key: K, value: V, now: DateTime<Utc>) {
        self.entries.insert(
            key,
            Entry {
                value,
                fetched_at: now,
            },
        );
    }

    /// Drop one entry so the next read refetches
    pub fn invalidate(&mut self, key: &K) -> Option<V> {
        self.entries.remove(key).map(|entry| entry.value)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn fresh_entries_are_served() {
        let mut cache = QueryCache::new(Duration::minutes(5));
        cache.insert("abc123".to_string(), 1, t0());

        assert_eq!(cache.get(&"abc123".to_string(), t0()), Some(&1));
        assert_eq!(
            cache.get(&"abc123".to_string(), t0() + Duration::minutes(4)),
            Some(&1)
        );
    }

    #[test]
    fn stale_entries_are_not_served() {
        let mut cache = QueryCache::new(Duration::minutes(5));
        cache.insert("abc123".to_string(), 1, t0());

        assert_eq!(cache.get(&"abc123".to_string(), t0() + Duration::minutes(5)), None);
    }

    #[test]
    fn insert_refreshes_timestamp() {
        let mut cache = QueryCache::new(Duration::minutes(5));
        cache.insert("k", 1, t0());
        cache.insert("k", 2, t0() + Duration::minutes(4));

        assert_eq!(cache.get(&"k", t0() + Duration::minutes(8)), Some(&2));
        assert_eq!(cache.get(&"k", t0() + Duration::minutes(9)), None);
    }

    #[test]
    fn invalidate_and_clear() {
        let mut cache = QueryCache::default();
        cache.insert("a", 1, t0());
        cache.insert("b", 2, t0());

        assert_eq!(cache.invalidate(&"a"), Some(1));
        assert_eq!(cache.get(&"a", t0()), None);
        assert_eq!(cache.invalidate(&"a"), None);

        cache.clear();
        assert_eq!(cache.get(&"b", t0()), None);
    }
}
