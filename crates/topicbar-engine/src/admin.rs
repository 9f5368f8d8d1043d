//! Remote topic operations.

use futures::future::BoxFuture;
use topicbar_core::{ClusterName, RemoteError, TopicName};

/// Trait for the remote operations a batch dispatches.
///
/// Returns `'static` futures so the caller can hold many in flight at once.
/// Each call either succeeds or fails as a whole; no payload is consumed.
pub trait TopicAdmin: Send + Sync {
    /// Delete one topic.
    fn delete_topic(
        &self,
        cluster: &ClusterName,
        topic: &TopicName,
    ) -> BoxFuture<'static, Result<(), RemoteError>>;

    /// Remove all messages of one topic.
    fn clear_messages(
        &self,
        cluster: &ClusterName,
        topic: &TopicName,
    ) -> BoxFuture<'static, Result<(), RemoteError>>;
}
