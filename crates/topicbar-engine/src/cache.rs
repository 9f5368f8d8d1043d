//! Client-side query cache.

use parking_lot::RwLock;
use std::collections::HashMap;

use topicbar_core::{CacheKey, Topic};

/// Invalidation side of a query cache.
///
/// `invalidate` drops every entry at or below `key`. Invalidating twice is
/// the same as invalidating once.
#[cfg_attr(test, mockall::automock)]
pub trait QueryCache: Send + Sync {
    fn invalidate(&self, key: &CacheKey);
}

/// In-memory cache of topic listings.
pub struct TopicCache {
    entries: RwLock<HashMap<CacheKey, Vec<Topic>>>,
}

impl TopicCache {
    /// Create a new empty cache.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Get a cached listing.
    pub fn get(&self, key: &CacheKey) -> Option<Vec<Topic>> {
        self.entries.read().get(key).cloned()
    }

    /// Store a listing.
    pub fn put(&self, key: CacheKey, topics: Vec<Topic>) {
        tracing::debug!("Cached {} topics under {}", topics.len(), key);
        self.entries.write().insert(key, topics);
    }

    /// Get the count of cached entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl Default for TopicCache {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryCache for TopicCache {
    fn invalidate(&self, key: &CacheKey) {
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|cached, _| !key.is_prefix_of(cached));
        tracing::debug!("Invalidated {} ({} entries)", key, before - entries.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use topicbar_core::{topic_keys, ClusterName};

    #[test]
    fn test_invalidate_drops_nested_keys_only() {
        let cache = TopicCache::new();
        let local = ClusterName::from("local");
        let prod = ClusterName::from("prod");
        cache.put(topic_keys::list(&local), vec![Topic::new("orders")]);
        cache.put(topic_keys::list(&prod), vec![Topic::new("events")]);

        cache.invalidate(&topic_keys::all(&local));

        assert!(cache.get(&topic_keys::list(&local)).is_none());
        assert_eq!(cache.get(&topic_keys::list(&prod)).unwrap().len(), 1);
    }

    #[test]
    fn test_invalidate_is_idempotent() {
        let cache = TopicCache::new();
        let local = ClusterName::from("local");
        let prod = ClusterName::from("prod");
        cache.put(topic_keys::list(&local), vec![Topic::new("orders")]);
        cache.put(topic_keys::list(&prod), vec![Topic::new("events")]);

        cache.invalidate(&topic_keys::all(&local));
        let once = cache.get(&topic_keys::list(&prod));
        let len_once = cache.len();

        cache.invalidate(&topic_keys::all(&local));
        assert_eq!(cache.len(), len_once);
        assert_eq!(cache.get(&topic_keys::list(&prod)), once);
    }
}
