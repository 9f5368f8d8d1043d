//! Permissions indexed by cluster and resource.
//!
//! The server reports a flat permission list; every check needs
//! "grants for this resource on this cluster", so the list is regrouped
//! once when roles are loaded:
//!
//! ```text
//! cluster ──► resource ──► [Grant { pattern, actions }, ...]
//! ```

use regex::Regex;
use std::collections::HashMap;
use thiserror::Error;

use topicbar_core::{Action, ClusterName, Resource};

use crate::auth_info::AuthenticationInfo;

/// Errors building the role map.
#[derive(Debug, Error)]
pub enum RbacError {
    #[error("Invalid permission value pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}

/// A compiled resource-name pattern. Matches whole names only.
#[derive(Debug, Clone)]
pub struct ValuePattern {
    source: String,
    regex: Regex,
}

impl ValuePattern {
    pub fn new(source: &str) -> Result<Self, RbacError> {
        let regex = Regex::new(&format!("^(?:{})$", source)).map_err(|e| {
            RbacError::InvalidPattern {
                pattern: source.to_string(),
                message: e.to_string(),
            }
        })?;
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl PartialEq for ValuePattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for ValuePattern {}

/// Actions granted on resources whose name matches `pattern`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grant {
    /// None grants on every name.
    pub pattern: Option<ValuePattern>,
    pub actions: Vec<Action>,
}

impl Grant {
    /// Check whether this grant covers `action` on `value`.
    pub fn allows(&self, action: Action, value: &str) -> bool {
        let value_ok = self
            .pattern
            .as_ref()
            .map_or(true, |pattern| pattern.is_match(value));
        let action_ok = action != Action::Unknown
            && self
                .actions
                .iter()
                .any(|granted| *granted == action || *granted == Action::All);
        value_ok && action_ok
    }
}

/// The current subject's role context.
///
/// Compared by value: two contexts built from the same permission list
/// are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolesAccess {
    rbac_enabled: bool,
    clusters: HashMap<ClusterName, HashMap<Resource, Vec<Grant>>>,
}

impl RolesAccess {
    /// A context for servers without RBAC. Every check passes.
    pub fn disabled() -> Self {
        Self {
            rbac_enabled: false,
            clusters: HashMap::new(),
        }
    }

    /// An RBAC context with no grants. Every check fails.
    pub fn empty() -> Self {
        Self {
            rbac_enabled: true,
            clusters: HashMap::new(),
        }
    }

    /// Build from the server's authentication info.
    pub fn from_auth_info(info: &AuthenticationInfo) -> Result<Self, RbacError> {
        if !info.rbac_enabled {
            return Ok(Self::disabled());
        }

        let mut roles = Self::empty();
        let Some(user) = &info.user_info else {
            tracing::debug!("RBAC enabled but no user info, denying everything");
            return Ok(roles);
        };

        for permission in &user.permissions {
            let pattern = permission
                .value
                .as_deref()
                .map(ValuePattern::new)
                .transpose()?;
            for cluster in &permission.clusters {
                roles.grant(
                    ClusterName::from(cluster.as_str()),
                    permission.resource,
                    Grant {
                        pattern: pattern.clone(),
                        actions: permission.actions.clone(),
                    },
                );
            }
        }

        tracing::debug!(
            "Loaded roles for '{}': {} permissions over {} clusters",
            user.username,
            user.permissions.len(),
            roles.clusters.len()
        );
        Ok(roles)
    }

    /// Add a grant.
    pub fn grant(&mut self, cluster: ClusterName, resource: Resource, grant: Grant) {
        self.clusters
            .entry(cluster)
            .or_default()
            .entry(resource)
            .or_default()
            .push(grant);
    }

    pub fn rbac_enabled(&self) -> bool {
        self.rbac_enabled
    }

    /// Grants on a resource in a cluster.
    pub fn grants(&self, cluster: &ClusterName, resource: Resource) -> &[Grant] {
        self.clusters
            .get(cluster)
            .and_then(|resources| resources.get(&resource))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
