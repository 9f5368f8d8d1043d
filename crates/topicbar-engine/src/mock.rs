//! Test doubles for engine collaborators.

use async_trait::async_trait;
use futures::future::BoxFuture;
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Barrier;

use topicbar_core::{Action, BatchAction, ClusterName, RemoteError, Resource, TopicName};
use topicbar_rbac::{PermissionEvaluator, RolesAccess};

use crate::admin::TopicAdmin;
use crate::confirm::Confirm;

mockall::mock! {
    pub Evaluator {}

    impl PermissionEvaluator for Evaluator {
        fn is_permitted(
            &self,
            roles: &RolesAccess,
            resource: Resource,
            action: Action,
            value: &str,
            cluster: &ClusterName,
        ) -> bool;
    }
}

/// Fake admin that records every dispatched call.
#[derive(Default)]
pub struct FakeAdmin {
    failing: HashSet<TopicName>,
    delays: HashMap<TopicName, Duration>,
    rendezvous: Option<Arc<Barrier>>,
    calls: Arc<Mutex<Vec<(BatchAction, TopicName)>>>,
    completed: Arc<AtomicUsize>,
}

impl FakeAdmin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make calls for `topic` fail.
    pub fn failing(mut self, topic: &str) -> Self {
        self.failing.insert(topic.into());
        self
    }

    /// Delay calls for `topic`.
    pub fn with_delay(mut self, topic: &str, delay: Duration) -> Self {
        self.delays.insert(topic.into(), delay);
        self
    }

    /// Make every call wait until `n` calls are in flight.
    pub fn with_rendezvous(mut self, n: usize) -> Self {
        self.rendezvous = Some(Arc::new(Barrier::new(n)));
        self
    }

    /// Topics dispatched for `action`, in dispatch order.
    pub fn calls(&self, action: BatchAction) -> Vec<TopicName> {
        self.calls
            .lock()
            .iter()
            .filter(|(a, _)| *a == action)
            .map(|(_, t)| t.clone())
            .collect()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().len()
    }

    /// Number of calls that have settled.
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    fn dispatch(
        &self,
        action: BatchAction,
        topic: &TopicName,
    ) -> BoxFuture<'static, Result<(), RemoteError>> {
        self.calls.lock().push((action, topic.clone()));

        let fail = self.failing.contains(topic);
        let delay = self.delays.get(topic).copied();
        let rendezvous = self.rendezvous.clone();
        let completed = Arc::clone(&self.completed);

        Box::pin(async move {
            if let Some(barrier) = rendezvous {
                barrier.wait().await;
            }
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            completed.fetch_add(1, Ordering::SeqCst);
            if fail {
                Err(RemoteError::Http {
                    status: 500,
                    message: "broker unavailable".to_string(),
                })
            } else {
                Ok(())
            }
        })
    }
}

impl TopicAdmin for FakeAdmin {
    fn delete_topic(
        &self,
        _cluster: &ClusterName,
        topic: &TopicName,
    ) -> BoxFuture<'static, Result<(), RemoteError>> {
        self.dispatch(BatchAction::Delete, topic)
    }

    fn clear_messages(
        &self,
        _cluster: &ClusterName,
        topic: &TopicName,
    ) -> BoxFuture<'static, Result<(), RemoteError>> {
        self.dispatch(BatchAction::Purge, topic)
    }
}

/// Confirmation that records prompts and answers a fixed value.
pub struct RecordingConfirm {
    answer: bool,
    prompts: Mutex<Vec<String>>,
}

impl RecordingConfirm {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }
}

#[async_trait]
impl Confirm for RecordingConfirm {
    async fn confirm(&self, prompt: &str) -> bool {
        self.prompts.lock().push(prompt.to_string());
        self.answer
    }
}
