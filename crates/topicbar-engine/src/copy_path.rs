//! Navigation target for copying a topic.
//!
//! The copy form is prefilled from the source topic's settings through the
//! query string. Only an explicit list of fields is carried over; the
//! partition layout and the internal flag never are. Unset, zero and empty
//! values are skipped.

use url::form_urlencoded;

use topicbar_core::{ClusterName, TableSelection, Topic};

/// Route of the copy form, relative to the cluster's topic list.
pub const TOPIC_COPY_RELATIVE_PATH: &str = "copy";

/// Path and query string for the copy form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyTarget {
    pub pathname: String,
    pub query: String,
}

impl CopyTarget {
    pub fn is_empty(&self) -> bool {
        self.pathname.is_empty() && self.query.is_empty()
    }

    /// Absolute UI route for `cluster`.
    pub fn href(&self, cluster: &ClusterName) -> String {
        let mut href = format!(
            "/ui/clusters/{}/all-topics/{}",
            encode_path_segment(cluster.as_ref()),
            self.pathname
        );
        if !self.query.is_empty() {
            href.push('?');
            href.push_str(&self.query);
        }
        href
    }
}

/// Percent-encode one path segment.
///
/// Form encoding escapes everything but `[A-Za-z0-9*-._]` and writes a
/// space as `+`, which a path reads as a literal plus. Spaces become `%20`.
fn encode_path_segment(segment: &str) -> String {
    form_urlencoded::byte_serialize(segment.as_bytes())
        .map(|part| if part == "+" { "%20" } else { part })
        .collect()
}

fn push_count(fields: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<u32>) {
    if let Some(v) = value.filter(|v| *v != 0) {
        fields.push((key, v.to_string()));
    }
}

fn push_rate(fields: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<f64>) {
    if let Some(v) = value.filter(|v| *v != 0.0 && !v.is_nan()) {
        fields.push((key, v.to_string()));
    }
}

/// Fields of `topic` carried into the copy form, in form order.
pub fn copy_fields(topic: &Topic) -> Vec<(&'static str, String)> {
    let mut fields = Vec::new();

    if !topic.name.0.is_empty() {
        fields.push(("name", topic.name.0.clone()));
    }
    push_count(&mut fields, "partitionCount", topic.partition_count);
    push_count(&mut fields, "replicationFactor", topic.replication_factor);
    push_count(&mut fields, "replicas", topic.replicas);
    push_count(&mut fields, "inSyncReplicas", topic.in_sync_replicas);
    if let Some(size) = topic.segment_size.filter(|s| *s != 0) {
        fields.push(("segmentSize", size.to_string()));
    }
    push_count(&mut fields, "segmentCount", topic.segment_count);
    push_rate(&mut fields, "bytesInPerSec", topic.bytes_in_per_sec);
    push_rate(&mut fields, "bytesOutPerSec", topic.bytes_out_per_sec);
    push_count(
        &mut fields,
        "underReplicatedPartitions",
        topic.under_replicated_partitions,
    );
    if let Some(policy) = topic.cleanup_policy.as_deref().filter(|p| !p.is_empty()) {
        fields.push(("cleanupPolicy", policy.to_string()));
    }

    fields
}

/// Copy target for the first selected row.
///
/// Meant for single-row selections; an empty selection gives an empty
/// target.
pub fn derive_copy_target(selection: &TableSelection) -> CopyTarget {
    let Some(topic) = selection.rows().first() else {
        return CopyTarget::default();
    };

    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(copy_fields(topic))
        .finish();

    CopyTarget {
        pathname: TOPIC_COPY_RELATIVE_PATH.to_string(),
        query,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use topicbar_core::Partition;

    #[test]
    fn test_copy_excludes_partitions_internal_and_falsy() {
        let mut topic = Topic::new("orders");
        topic.partitions = vec![Partition::default()];
        topic.internal = false;
        topic.cleanup_policy = Some("compact".to_string());
        topic.segment_count = Some(0);
        topic.bytes_in_per_sec = Some(0.0);

        let target = derive_copy_target(&TableSelection::from_rows([topic]));

        assert_eq!(target.pathname, "copy");
        assert_eq!(target.query, "name=orders&cleanupPolicy=compact");
        assert!(!target.query.contains("partitions"));
        assert!(!target.query.contains("internal"));
        assert!(!target.query.contains("segmentCount"));
    }

    #[test]
    fn test_copy_keeps_numeric_settings_in_order() {
        let mut topic = Topic::new("events");
        topic.internal = true;
        topic.partition_count = Some(6);
        topic.replication_factor = Some(3);
        topic.bytes_in_per_sec = Some(12.5);

        let fields = copy_fields(&topic);
        assert_eq!(
            fields,
            vec![
                ("name", "events".to_string()),
                ("partitionCount", "6".to_string()),
                ("replicationFactor", "3".to_string()),
                ("bytesInPerSec", "12.5".to_string()),
            ]
        );
    }

    #[test]
    fn test_copy_uses_first_row_only() {
        let selection = TableSelection::from_rows([Topic::new("first"), Topic::new("second")]);
        assert_eq!(derive_copy_target(&selection).query, "name=first");
    }

    #[test]
    fn test_copy_empty_selection() {
        let target = derive_copy_target(&TableSelection::new());
        assert!(target.is_empty());
        assert_eq!(target, CopyTarget::default());
    }

    #[test]
    fn test_copy_query_is_form_encoded() {
        let mut topic = Topic::new("a b&c");
        topic.cleanup_policy = Some("compact,delete".to_string());
        let target = derive_copy_target(&TableSelection::from_rows([topic]));
        assert_eq!(target.query, "name=a+b%26c&cleanupPolicy=compact%2Cdelete");
    }

    #[test]
    fn test_href() {
        let target = derive_copy_target(&TableSelection::from_rows([Topic::new("orders")]));
        assert_eq!(
            target.href(&"local".into()),
            "/ui/clusters/local/all-topics/copy?name=orders"
        );
    }

    #[test]
    fn test_href_encodes_cluster_as_path_segment() {
        let target = derive_copy_target(&TableSelection::from_rows([Topic::new("orders")]));
        assert_eq!(
            target.href(&"my cluster+1/eu".into()),
            "/ui/clusters/my%20cluster%2B1%2Feu/all-topics/copy?name=orders"
        );
    }
}
