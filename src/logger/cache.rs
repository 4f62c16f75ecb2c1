/// Message cache with LRU eviction
///
/// Maps exact message text to its `LogEntry`. Bounded by capacity so a
/// long-running process logging many distinct messages does not grow forever.
/// A capacity of 0 disables eviction.
use super::entry::LogEntry;
use std::collections::{HashMap, VecDeque};

/// Cache metrics for monitoring
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheMetrics {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub inserts: u64,
}

impl CacheMetrics {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

#[derive(Debug)]
pub struct MessageCache {
    capacity: usize,
    data: HashMap<String, LogEntry>,
    access_order: VecDeque<String>, // front = least recently used
    metrics: CacheMetrics,
}

impl MessageCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            data: HashMap::new(),
            access_order: VecDeque::new(),
            metrics: CacheMetrics::default(),
        }
    }

    /// Look up `key`, creating its entry with `make` on a miss.
    /// Returns the entry and whether it was just created.
    pub fn get_or_insert_with<F>(&mut self, key: &str, make: F) -> (&mut LogEntry, bool)
    where
        F: FnOnce() -> LogEntry,
    {
        let created = !self.data.contains_key(key);

        if created {
            self.metrics.misses += 1;
            if self.capacity > 0 && self.data.len() >= self.capacity {
                self.evict_lru();
            }
            self.metrics.inserts += 1;
        } else {
            self.metrics.hits += 1;
        }

        self.update_access_order(key);
        let entry = self.data.entry(key.to_owned()).or_insert_with(make);
        (entry, created)
    }

    /// Read an entry without touching recency or metrics
    pub fn peek(&self, key: &str) -> Option<&LogEntry> {
        self.data.get(key)
    }

    pub fn metrics(&self) -> CacheMetrics {
        self.metrics.clone()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    // Private: Evict least recently used entry
    fn evict_lru(&mut self) {
        if let Some(lru_key) = self.access_order.pop_front() {
            self.data.remove(&lru_key);
            self.metrics.evictions += 1;
        }
    }

    // Private: Move key to the most recently used position
    fn update_access_order(&mut self, key: &str) {
        self.access_order.retain(|k| k != key);
        self.access_order.push_back(key.to_owned());
    }
}
