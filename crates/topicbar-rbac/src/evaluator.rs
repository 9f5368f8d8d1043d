//! Per-item permission check.

use topicbar_core::{Action, ClusterName, Resource};

use crate::roles::RolesAccess;

/// Check whether the role context allows `action` on the resource named
/// `value` in `cluster`.
///
/// - RBAC disabled: always allowed.
/// - No grants for the cluster/resource pair: denied.
/// - Otherwise allowed iff some grant matches the name and includes the
///   action (or `ALL`).
pub fn is_permitted(
    roles: &RolesAccess,
    resource: Resource,
    action: Action,
    value: &str,
    cluster: &ClusterName,
) -> bool {
    if !roles.rbac_enabled() {
        return true;
    }

    roles
        .grants(cluster, resource)
        .iter()
        .any(|grant| grant.allows(action, value))
}

/// The permission evaluator consulted by authorization gates.
///
/// Must be a pure function of its arguments.
pub trait PermissionEvaluator: Send + Sync {
    fn is_permitted(
        &self,
        roles: &RolesAccess,
        resource: Resource,
        action: Action,
        value: &str,
        cluster: &ClusterName,
    ) -> bool;
}

/// Evaluator backed by the server-reported roles.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleEvaluator;

impl PermissionEvaluator for RoleEvaluator {
    fn is_permitted(
        &self,
        roles: &RolesAccess,
        resource: Resource,
        action: Action,
        value: &str,
        cluster: &ClusterName,
    ) -> bool {
        is_permitted(roles, resource, action, value, cluster)
    }
}
