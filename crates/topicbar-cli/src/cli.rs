//! Command-line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use topicbar_core::{AppConfig, ClusterName};

use crate::error::CliError;

/// Bulk topic actions for Kafka UI.
#[derive(Debug, Parser)]
#[command(name = "topicbar", version, about)]
pub struct Cli {
    /// Config file (default: <config dir>/topicbar/config.toml)
    #[arg(long, global = true, env = "TOPICBAR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Kafka UI server URL, overrides the config file
    #[arg(long, global = true, env = "TOPICBAR_URL")]
    pub url: Option<String>,

    /// Cluster to act on, overrides the config file
    #[arg(short, long, global = true, env = "TOPICBAR_CLUSTER")]
    pub cluster: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the cluster's topics
    List,

    /// Show which actions are available for a selection
    Status {
        #[arg(required = true)]
        topics: Vec<String>,
    },

    /// Delete the selected topics
    Delete {
        #[arg(required = true)]
        topics: Vec<String>,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Purge all messages of the selected topics
    Purge {
        #[arg(required = true)]
        topics: Vec<String>,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Print the copy-form link for one topic
    Copy { topic: String },
}

impl Cli {
    /// Load the config file and apply command-line overrides.
    pub fn resolve_config(&self) -> Result<AppConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::load_default()?,
        };

        if let Some(url) = &self.url {
            config.server.url = url.clone();
            config.server.base_url()?;
        }
        if let Some(cluster) = &self.cluster {
            config.defaults.cluster = Some(cluster.clone());
        }
        Ok(config)
    }
}

/// The cluster to act on.
pub fn cluster(config: &AppConfig) -> Result<ClusterName, CliError> {
    config
        .defaults
        .cluster
        .as_deref()
        .map(ClusterName::from)
        .ok_or(CliError::NoCluster)
}
