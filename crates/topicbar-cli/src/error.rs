//! CLI error type.

use thiserror::Error;

use topicbar_client::ClientError;
use topicbar_core::{BatchAction, ConfigError, RemoteError};
use topicbar_engine::EngineError;
use topicbar_rbac::RbacError;

/// Everything that can stop a command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error(transparent)]
    Rbac(#[from] RbacError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    /// No cluster given and none configured.
    #[error("No cluster selected: pass --cluster or set defaults.cluster")]
    NoCluster,

    /// A requested topic is not in the cluster.
    #[error("Unknown topic '{topic}' in cluster '{cluster}'")]
    UnknownTopic { cluster: String, topic: String },

    /// Some selected topic does not grant the action.
    #[error("You don't have permission to {action} every selected topic")]
    Forbidden { action: BatchAction },
}
