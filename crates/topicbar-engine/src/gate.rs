//! Authorization gates for batch actions.
//!
//! A gate is the conjunction of per-topic permission checks: a batch action
//! is allowed only if every selected topic allows it. An empty selection is
//! vacuously allowed; the action bar disables empty batches separately.
//!
//! `MemoizedGate` caches the last result together with the exact inputs it
//! was computed from. Any change of names, cluster or roles is a miss.

use parking_lot::Mutex;
use std::sync::Arc;

use topicbar_core::{Action, ClusterName, Resource, TopicName};
use topicbar_rbac::{PermissionEvaluator, RolesAccess};

/// Check `action` on every topic in order, stopping at the first denial.
pub fn is_batch_permitted(
    evaluator: &dyn PermissionEvaluator,
    keys: &[TopicName],
    action: Action,
    cluster: &ClusterName,
    roles: &RolesAccess,
) -> bool {
    keys.iter().all(|key| {
        evaluator.is_permitted(roles, Resource::Topic, action, key.as_ref(), cluster)
    })
}

/// The inputs a cached gate value was computed from.
#[derive(Debug, Clone)]
struct GateInputs {
    keys: Vec<TopicName>,
    cluster: ClusterName,
    roles: Arc<RolesAccess>,
}

impl GateInputs {
    fn matches(&self, keys: &[TopicName], cluster: &ClusterName, roles: &Arc<RolesAccess>) -> bool {
        self.keys == keys
            && &self.cluster == cluster
            && (Arc::ptr_eq(&self.roles, roles) || *self.roles == **roles)
    }
}

/// A batch permission gate for one action, memoized on its inputs.
pub struct MemoizedGate {
    action: Action,
    cached: Mutex<Option<(GateInputs, bool)>>,
}

impl MemoizedGate {
    /// Create a gate for `action`.
    pub fn new(action: Action) -> Self {
        Self {
            action,
            cached: Mutex::new(None),
        }
    }

    /// Gate value for these inputs, recomputed if any input changed.
    pub fn get(
        &self,
        evaluator: &dyn PermissionEvaluator,
        keys: &[TopicName],
        cluster: &ClusterName,
        roles: &Arc<RolesAccess>,
    ) -> bool {
        let mut cached = self.cached.lock();
        if let Some((inputs, value)) = cached.as_ref() {
            if inputs.matches(keys, cluster, roles) {
                return *value;
            }
        }

        let value = is_batch_permitted(evaluator, keys, self.action, cluster, roles);
        tracing::debug!(
            "Recomputed {:?} gate over {} topics in '{}': {}",
            self.action,
            keys.len(),
            cluster,
            value
        );
        *cached = Some((
            GateInputs {
                keys: keys.to_vec(),
                cluster: cluster.clone(),
                roles: Arc::clone(roles),
            },
            value,
        ));
        value
    }

    /// Drop the cached value.
    pub fn invalidate(&self) {
        *self.cached.lock() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockEvaluator;
    use topicbar_rbac::{Grant, RoleEvaluator, ValuePattern};

    fn names(list: &[&str]) -> Vec<TopicName> {
        list.iter().map(|n| TopicName::from(*n)).collect()
    }

    fn deny_only(denied: &'static str) -> MockEvaluator {
        let mut evaluator = MockEvaluator::new();
        evaluator
            .expect_is_permitted()
            .returning(move |_, _, _, value, _| value != denied);
        evaluator
    }

    #[test]
    fn test_gate_true_when_all_permitted() {
        let evaluator = deny_only("nothing");
        let keys = names(&["orders", "events"]);
        assert!(is_batch_permitted(
            &evaluator,
            &keys,
            Action::Delete,
            &"local".into(),
            &RolesAccess::empty()
        ));
    }

    #[test]
    fn test_gate_false_when_one_denied() {
        let evaluator = deny_only("events");
        let keys = names(&["orders", "events"]);
        assert!(!is_batch_permitted(
            &evaluator,
            &keys,
            Action::Delete,
            &"local".into(),
            &RolesAccess::empty()
        ));
    }

    #[test]
    fn test_gate_stops_at_first_denial() {
        let mut evaluator = MockEvaluator::new();
        evaluator
            .expect_is_permitted()
            .withf(|_, _, _, value, _| value == "a")
            .times(1)
            .return_const(true);
        evaluator
            .expect_is_permitted()
            .withf(|_, _, _, value, _| value == "b")
            .times(1)
            .return_const(false);
        evaluator
            .expect_is_permitted()
            .withf(|_, _, _, value, _| value == "c")
            .never();

        let keys = names(&["a", "b", "c"]);
        assert!(!is_batch_permitted(
            &evaluator,
            &keys,
            Action::MessagesDelete,
            &"local".into(),
            &RolesAccess::empty()
        ));
    }

    #[test]
    fn test_empty_selection_is_vacuously_permitted() {
        let mut evaluator = MockEvaluator::new();
        evaluator.expect_is_permitted().never();
        assert!(is_batch_permitted(
            &evaluator,
            &[],
            Action::Delete,
            &"local".into(),
            &RolesAccess::empty()
        ));
    }

    #[test]
    fn test_gate_queries_topic_resource_and_action() {
        let mut evaluator = MockEvaluator::new();
        evaluator
            .expect_is_permitted()
            .withf(|_, resource, action, _, cluster| {
                *resource == Resource::Topic
                    && *action == Action::MessagesDelete
                    && cluster.as_ref() == "prod"
            })
            .times(1)
            .return_const(true);

        let gate = MemoizedGate::new(Action::MessagesDelete);
        assert!(gate.get(
            &evaluator,
            &names(&["orders"]),
            &"prod".into(),
            &Arc::new(RolesAccess::empty())
        ));
    }

    #[test]
    fn test_memoized_gate_reuses_value_for_same_inputs() {
        let mut evaluator = MockEvaluator::new();
        evaluator.expect_is_permitted().times(2).return_const(true);

        let gate = MemoizedGate::new(Action::Delete);
        let roles = Arc::new(RolesAccess::empty());
        let keys = names(&["orders", "events"]);

        assert!(gate.get(&evaluator, &keys, &"local".into(), &roles));
        assert!(gate.get(&evaluator, &keys, &"local".into(), &roles));
        // Equal content in a new allocation is still a hit.
        let same_roles = Arc::new(RolesAccess::empty());
        assert!(gate.get(&evaluator, &keys.clone(), &"local".into(), &same_roles));
    }

    #[test]
    fn test_memoized_gate_recomputes_on_each_input_change() {
        let mut evaluator = MockEvaluator::new();
        // 1 (initial) + 2 (keys) + 2 (cluster) + 2 (roles) + 2 (invalidate)
        evaluator.expect_is_permitted().times(9).return_const(true);

        let gate = MemoizedGate::new(Action::Delete);
        let roles = Arc::new(RolesAccess::empty());

        gate.get(&evaluator, &names(&["a"]), &"local".into(), &roles);
        gate.get(&evaluator, &names(&["a", "b"]), &"local".into(), &roles);
        gate.get(&evaluator, &names(&["a", "b"]), &"prod".into(), &roles);
        gate.get(
            &evaluator,
            &names(&["a", "b"]),
            &"prod".into(),
            &Arc::new(RolesAccess::disabled()),
        );
        gate.invalidate();
        gate.get(
            &evaluator,
            &names(&["a", "b"]),
            &"prod".into(),
            &Arc::new(RolesAccess::disabled()),
        );
    }

    #[test]
    fn test_roles_change_is_never_read_stale() {
        let gate = MemoizedGate::new(Action::Delete);
        let keys = names(&["orders", "events"]);
        let local = ClusterName::from("local");

        let mut grant_all = RolesAccess::empty();
        grant_all.grant(
            local.clone(),
            Resource::Topic,
            Grant {
                pattern: None,
                actions: vec![Action::Delete],
            },
        );
        assert!(gate.get(&RoleEvaluator, &keys, &local, &Arc::new(grant_all)));

        let mut orders_only = RolesAccess::empty();
        orders_only.grant(
            local.clone(),
            Resource::Topic,
            Grant {
                pattern: Some(ValuePattern::new("orders").unwrap()),
                actions: vec![Action::Delete],
            },
        );
        assert!(!gate.get(&RoleEvaluator, &keys, &local, &Arc::new(orders_only)));
    }
}
