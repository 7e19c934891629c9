//! Short-lived client-side list caches

use chrono::{DateTime, Duration, Utc};

/// A cached list with a time-to-live.
///
/// Callers must [`invalidate`](ListCache::invalidate) after any mutation of
/// the underlying collection; the TTL only bounds staleness caused by other
/// clients.
#[derive(Debug, Clone)]
pub struct ListCache<T> {
    entries: Option<Vec<T>>,
    stored_at: Option<DateTime<Utc>>,
    ttl: Duration,
    generation: u64,
}

impl<T: Clone> ListCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: None,
            stored_at: None,
            ttl,
            generation: 0,
        }
    }

    /// Cached entries if still fresh at `now`
    pub fn get_at(&self, now: DateTime<Utc>) -> Option<Vec<T>> {
        let stored_at = self.stored_at?;
        if now - stored_at >= self.ttl {
            return None;
        }
        self.entries.clone()
    }

    pub fn get(&self) -> Option<Vec<T>> {
        self.get_at(Utc::now())
    }

    pub fn put_at(&mut self, entries: Vec<T>, now: DateTime<Utc>) {
        self.entries = Some(entries);
        self.stored_at = Some(now);
    }

    pub fn put(&mut self, entries: Vec<T>) {
        self.put_at(entries, Utc::now());
    }

    pub fn invalidate(&mut self) {
        self.entries = None;
        self.stored_at = None;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Bumped by every [`invalidate`](ListCache::invalidate)
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Store a list fetched while the cache was at `generation`.
    ///
    /// Returns `false` and keeps the cache empty when an invalidation
    /// happened in between.
    pub fn put_if_generation(&mut self, generation: u64, entries: Vec<T>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.put(entries);
        true
    }

    pub fn is_populated(&self) -> bool {
        self.entries.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cache_misses() {
        let cache: ListCache<u32> = ListCache::new(Duration::seconds(60));
        assert_eq!(cache.get(), None);
        assert!(!cache.is_populated());
    }

    #[test]
    fn fresh_entries_are_served_until_ttl() {
        let t0 = Utc::now();
        let mut cache = ListCache::new(Duration::seconds(60));
        cache.put_at(vec![1, 2, 3], t0);
        assert_eq!(cache.get_at(t0 + Duration::seconds(59)), Some(vec![1, 2, 3]));
        assert_eq!(cache.get_at(t0 + Duration::seconds(60)), None);
    }

    #[test]
    fn invalidate_forces_a_miss() {
        let t0 = Utc::now();
        let mut cache = ListCache::new(Duration::seconds(300));
        cache.put_at(vec!["Cattle"], t0);
        cache.invalidate();
        assert_eq!(cache.get_at(t0), None);
        assert!(!cache.is_populated());
    }

    #[test]
    fn fetch_started_before_invalidate_is_discarded() {
        let mut cache = ListCache::new(Duration::seconds(300));
        assert_eq!(cache.get(), None);
        let started = cache.generation();

        cache.invalidate();
        assert!(!cache.put_if_generation(started, vec!["Cattle"]));
        assert_eq!(cache.get(), None);

        let retry = cache.generation();
        assert!(cache.put_if_generation(retry, vec!["Cattle", "Goat"]));
        assert_eq!(cache.get(), Some(vec!["Cattle", "Goat"]));
    }
}
