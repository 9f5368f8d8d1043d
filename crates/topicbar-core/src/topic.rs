//! Topic records and identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// Topic name. Unique within a cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicName(pub String);

impl From<String> for TopicName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TopicName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for TopicName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TopicName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// Cluster identifier. The scope inside which topic names are unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClusterName(pub String);

impl From<String> for ClusterName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ClusterName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ClusterName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClusterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// A topic as listed by the server.
///
/// Everything users select and act upon in the topic table is a topic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    /// Unique key within the cluster.
    pub name: TopicName,

    /// Broker-internal topic (e.g. `__consumer_offsets`).
    #[serde(default)]
    pub internal: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_count: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replication_factor: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replicas: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_sync_replicas: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment_size: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment_count: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bytes_in_per_sec: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bytes_out_per_sec: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub under_replicated_partitions: Option<u32>,

    /// Retention policy, e.g. "delete" or "compact".
    #[serde(
        default,
        rename = "cleanUpPolicy",
        alias = "cleanupPolicy",
        skip_serializing_if = "Option::is_none"
    )]
    pub cleanup_policy: Option<String>,

    #[serde(default)]
    pub partitions: Vec<Partition>,
}

impl Topic {
    /// Create a topic with only a name.
    pub fn new(name: impl Into<TopicName>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Number of partitions, falling back to the partition list.
    pub fn partition_total(&self) -> usize {
        self.partition_count
            .map(|c| c as usize)
            .unwrap_or(self.partitions.len())
    }
}

/// Partition details of a topic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partition {
    pub partition: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leader: Option<i32>,

    #[serde(default)]
    pub offset_min: i64,

    #[serde(default)]
    pub offset_max: i64,

    #[serde(default)]
    pub replicas: Vec<Replica>,
}

/// A partition replica on one broker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Replica {
    pub broker: i32,
    #[serde(default)]
    pub leader: bool,
    #[serde(default)]
    pub in_sync: bool,
}
