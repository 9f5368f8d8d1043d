//! Batch action bar over a topic table selection.
//!
//! Three controls share one selection:
//! - delete: enabled for a non-empty selection whose every topic grants DELETE
//! - copy: enabled for exactly one selected topic
//! - purge: enabled for a non-empty selection whose every topic grants MESSAGES_DELETE
//!
//! Running a batch asks for confirmation first. Declining dispatches
//! nothing. The selection is reset only when every member succeeded.

use std::fmt;
use std::sync::Arc;

use topicbar_core::{BatchAction, ClusterName, TableSelection};
use topicbar_rbac::{PermissionEvaluator, RoleEvaluator, RolesAccess};

use crate::admin::TopicAdmin;
use crate::cache::QueryCache;
use crate::confirm::Confirm;
use crate::copy_path::{derive_copy_target, CopyTarget};
use crate::error::EngineError;
use crate::executor::{BatchExecutor, BatchOutcome};
use crate::gate::MemoizedGate;
use crate::resolver::resolve;

/// Presentation state of one control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlState {
    Enabled,
    /// Nothing (or the wrong number of rows) selected.
    Disabled,
    /// Selected, but some topic does not grant the action.
    Forbidden,
}

impl ControlState {
    pub fn is_enabled(self) -> bool {
        self == ControlState::Enabled
    }

    fn for_batch(selected: usize, permitted: bool) -> Self {
        if selected == 0 {
            ControlState::Disabled
        } else if !permitted {
            ControlState::Forbidden
        } else {
            ControlState::Enabled
        }
    }
}

impl fmt::Display for ControlState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlState::Enabled => f.write_str("enabled"),
            ControlState::Disabled => f.write_str("disabled"),
            ControlState::Forbidden => f.write_str("forbidden"),
        }
    }
}

/// State of every control for one selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionBarState {
    pub delete: ControlState,
    pub copy: ControlState,
    pub purge: ControlState,
}

/// Gates and runs batch actions for one cluster's topic table.
pub struct BatchActionBar {
    cluster: ClusterName,
    roles: Arc<RolesAccess>,
    evaluator: Arc<dyn PermissionEvaluator>,
    confirm: Arc<dyn Confirm>,
    executor: BatchExecutor,
    delete_gate: MemoizedGate,
    purge_gate: MemoizedGate,
}

impl BatchActionBar {
    /// Create an action bar using the role-based evaluator.
    pub fn new(
        cluster: ClusterName,
        roles: RolesAccess,
        admin: Arc<dyn TopicAdmin>,
        cache: Arc<dyn QueryCache>,
        confirm: Arc<dyn Confirm>,
    ) -> Self {
        Self {
            cluster,
            roles: Arc::new(roles),
            evaluator: Arc::new(RoleEvaluator),
            confirm,
            executor: BatchExecutor::new(admin, cache),
            delete_gate: MemoizedGate::new(BatchAction::Delete.required_permission()),
            purge_gate: MemoizedGate::new(BatchAction::Purge.required_permission()),
        }
    }

    /// Use a custom permission evaluator.
    pub fn with_evaluator(mut self, evaluator: Arc<dyn PermissionEvaluator>) -> Self {
        self.evaluator = evaluator;
        // Cached values came from the previous evaluator.
        self.delete_gate.invalidate();
        self.purge_gate.invalidate();
        self
    }

    /// Switch to another cluster.
    pub fn set_cluster(&mut self, cluster: ClusterName) {
        self.cluster = cluster;
    }

    /// Replace the subject's roles.
    pub fn set_roles(&mut self, roles: RolesAccess) {
        self.roles = Arc::new(roles);
    }

    fn gate(&self, action: BatchAction) -> &MemoizedGate {
        match action {
            BatchAction::Delete => &self.delete_gate,
            BatchAction::Purge => &self.purge_gate,
        }
    }

    /// Whether every selected topic grants `action`. True for an empty selection.
    pub fn is_permitted(&self, action: BatchAction, selection: &TableSelection) -> bool {
        let keys = resolve(selection);
        self.gate(action)
            .get(self.evaluator.as_ref(), &keys, &self.cluster, &self.roles)
    }

    pub fn can_delete(&self, selection: &TableSelection) -> bool {
        self.is_permitted(BatchAction::Delete, selection)
    }

    pub fn can_purge(&self, selection: &TableSelection) -> bool {
        self.is_permitted(BatchAction::Purge, selection)
    }

    /// State of a batch control.
    pub fn control(&self, action: BatchAction, selection: &TableSelection) -> ControlState {
        ControlState::for_batch(selection.len(), self.is_permitted(action, selection))
    }

    /// State of every control.
    pub fn state(&self, selection: &TableSelection) -> ActionBarState {
        ActionBarState {
            delete: self.control(BatchAction::Delete, selection),
            copy: if selection.len() == 1 {
                ControlState::Enabled
            } else {
                ControlState::Disabled
            },
            purge: self.control(BatchAction::Purge, selection),
        }
    }

    /// Confirm and delete the selected topics.
    ///
    /// Returns `Ok(None)` if the user declined.
    pub async fn delete_selected(
        &self,
        selection: &mut TableSelection,
    ) -> Result<Option<BatchOutcome>, EngineError> {
        self.run(BatchAction::Delete, selection).await
    }

    /// Confirm and purge messages of the selected topics.
    ///
    /// Returns `Ok(None)` if the user declined.
    pub async fn purge_selected(
        &self,
        selection: &mut TableSelection,
    ) -> Result<Option<BatchOutcome>, EngineError> {
        self.run(BatchAction::Purge, selection).await
    }

    async fn run(
        &self,
        action: BatchAction,
        selection: &mut TableSelection,
    ) -> Result<Option<BatchOutcome>, EngineError> {
        let state = self.control(action, selection);
        if !state.is_enabled() {
            return Err(EngineError::Unavailable { action, state });
        }

        let keys = resolve(selection);
        if !self.confirm.confirm(action.prompt()).await {
            tracing::debug!("{} of {} topics declined", action, keys.len());
            return Ok(None);
        }

        let outcome = self
            .executor
            .run(action, &self.cluster, &keys, || selection.reset())
            .await;
        Ok(Some(outcome))
    }

    /// Copy target for the single selected topic.
    pub fn copy_target(&self, selection: &TableSelection) -> Result<CopyTarget, EngineError> {
        if selection.len() != 1 {
            return Err(EngineError::CopyNeedsSingleRow(selection.len()));
        }
        Ok(derive_copy_target(selection))
    }
}
