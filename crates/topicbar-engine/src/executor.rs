//! Batch execution.
//!
//! One remote call per topic, all in flight together, one join barrier.
//! `on_all_succeeded` and `on_settled` run only after every call has
//! settled, each at most once per batch.
//!
//! ## Failure Policy
//!
//! Failed members are logged and reported in the returned `BatchOutcome`.
//! Nothing is retried and calls that succeeded are not rolled back.

use futures::future::join_all;
use std::future::Future;
use std::sync::Arc;

use topicbar_core::{topic_keys, BatchAction, ClusterName, RemoteError, TopicName};

use crate::admin::TopicAdmin;
use crate::cache::QueryCache;

/// Per-topic result of a batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchOutcome {
    /// Topics whose call succeeded, in dispatch order.
    pub succeeded: Vec<TopicName>,
    /// Topics whose call failed, in dispatch order.
    pub failed: Vec<(TopicName, RemoteError)>,
}

impl BatchOutcome {
    /// Check if every member succeeded.
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }

    /// Get the total number of members.
    pub fn len(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Run `call` for every key concurrently and join.
///
/// All calls are created and polled before any is awaited to completion.
/// `on_all_succeeded` runs only if every call succeeded; `on_settled` runs
/// regardless.
pub async fn execute<F, Fut, S, T>(
    action: BatchAction,
    keys: &[TopicName],
    call: F,
    on_all_succeeded: S,
    on_settled: T,
) -> BatchOutcome
where
    F: Fn(TopicName) -> Fut,
    Fut: Future<Output = Result<(), RemoteError>>,
    S: FnOnce(),
    T: FnOnce(),
{
    tracing::info!("Dispatching {} for {} topics", action, keys.len());

    let calls = keys.iter().map(|key| {
        let pending = call(key.clone());
        let key = key.clone();
        async move { (key, pending.await) }
    });
    let results = join_all(calls).await;

    let mut outcome = BatchOutcome::default();
    for (key, result) in results {
        match result {
            Ok(()) => outcome.succeeded.push(key),
            Err(e) => {
                tracing::warn!("{} of topic '{}' failed: {}", action, key, e);
                outcome.failed.push((key, e));
            }
        }
    }

    if outcome.all_succeeded() {
        on_all_succeeded();
    }
    on_settled();

    tracing::info!(
        "{} settled: {} succeeded, {} failed",
        action,
        outcome.succeeded.len(),
        outcome.failed.len()
    );
    outcome
}

/// Executes delete and purge batches against a `TopicAdmin`.
#[derive(Clone)]
pub struct BatchExecutor {
    admin: Arc<dyn TopicAdmin>,
    cache: Arc<dyn QueryCache>,
}

impl BatchExecutor {
    /// Create a new executor.
    pub fn new(admin: Arc<dyn TopicAdmin>, cache: Arc<dyn QueryCache>) -> Self {
        Self { admin, cache }
    }

    /// Run `action` for `keys`.
    pub async fn run(
        &self,
        action: BatchAction,
        cluster: &ClusterName,
        keys: &[TopicName],
        on_all_succeeded: impl FnOnce(),
    ) -> BatchOutcome {
        match action {
            BatchAction::Delete => self.delete(cluster, keys, on_all_succeeded).await,
            BatchAction::Purge => self.purge(cluster, keys, on_all_succeeded).await,
        }
    }

    /// Delete topics.
    ///
    /// Each successful delete invalidates the cluster's topic queries
    /// itself; there is no extra invalidation after the join.
    pub async fn delete(
        &self,
        cluster: &ClusterName,
        keys: &[TopicName],
        on_all_succeeded: impl FnOnce(),
    ) -> BatchOutcome {
        let collection = topic_keys::all(cluster);
        execute(
            BatchAction::Delete,
            keys,
            |key| {
                let pending = self.admin.delete_topic(cluster, &key);
                let cache = Arc::clone(&self.cache);
                let collection = collection.clone();
                async move {
                    pending.await?;
                    cache.invalidate(&collection);
                    Ok(())
                }
            },
            on_all_succeeded,
            || {},
        )
        .await
    }

    /// Purge messages of topics.
    ///
    /// The cluster's topic queries are invalidated once after the join,
    /// whatever the outcome.
    pub async fn purge(
        &self,
        cluster: &ClusterName,
        keys: &[TopicName],
        on_all_succeeded: impl FnOnce(),
    ) -> BatchOutcome {
        let collection = topic_keys::all(cluster);
        execute(
            BatchAction::Purge,
            keys,
            |key| self.admin.clear_messages(cluster, &key),
            on_all_succeeded,
            || self.cache.invalidate(&collection),
        )
        .await
    }
}
