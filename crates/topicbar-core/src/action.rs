//! Action-related types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Resource kinds that permissions are granted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Resource {
    #[serde(rename = "APPLICATIONCONFIG")]
    ApplicationConfig,
    #[serde(rename = "CLUSTERCONFIG")]
    ClusterConfig,
    Topic,
    Consumer,
    Schema,
    Connect,
    Ksql,
    Acl,
    Audit,
}

/// Permission actions as reported by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Wildcard: grants every action on the resource.
    All,
    View,
    Edit,
    Create,
    Delete,
    MessagesRead,
    MessagesProduce,
    MessagesDelete,
    ResetOffsets,
    Restart,
    ModifyConfig,
    /// Any action this client does not know about. Never granted by a check.
    #[serde(other)]
    Unknown,
}

/// Bulk operations offered for a topic selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchAction {
    /// Remove the selected topics.
    Delete,
    /// Remove all messages of the selected topics.
    Purge,
}

impl BatchAction {
    /// The permission action each selected topic must grant.
    pub fn required_permission(self) -> Action {
        match self {
            BatchAction::Delete => Action::Delete,
            BatchAction::Purge => Action::MessagesDelete,
        }
    }

    /// Confirmation prompt shown before dispatch.
    pub fn prompt(self) -> &'static str {
        match self {
            BatchAction::Delete => "Are you sure you want to remove selected topics?",
            BatchAction::Purge => "Are you sure you want to purge messages of selected topics?",
        }
    }

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            BatchAction::Delete => "Delete selected topics",
            BatchAction::Purge => "Purge messages of selected topics",
        }
    }
}

impl fmt::Display for BatchAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchAction::Delete => f.write_str("delete"),
            BatchAction::Purge => f.write_str("purge"),
        }
    }
}
