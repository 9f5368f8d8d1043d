//! Cache keys for server-side collections.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::topic::ClusterName;

/// Hierarchical key identifying a cached query result.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheKey(pub Vec<String>);

impl CacheKey {
    /// Check whether `other` is this key or nested below it.
    pub fn is_prefix_of(&self, other: &CacheKey) -> bool {
        other.0.starts_with(&self.0)
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("/"))
    }
}

/// Keys for topic queries.
pub mod topic_keys {
    use super::*;

    /// Every topic query of a cluster.
    pub fn all(cluster: &ClusterName) -> CacheKey {
        CacheKey(vec![
            "clusters".to_string(),
            cluster.0.clone(),
            "topics".to_string(),
        ])
    }

    /// The topic list of a cluster.
    pub fn list(cluster: &ClusterName) -> CacheKey {
        let mut key = all(cluster);
        key.0.push("list".to_string());
        key
    }
}
