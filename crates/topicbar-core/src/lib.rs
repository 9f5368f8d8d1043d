//! Core types for topicbar.
//!
//! This crate contains shared data structures that are used across all topicbar crates:
//! - Topic records and the names that key them
//! - Table selection
//! - Batch actions and permission vocabulary
//! - Cache keys
//! - Configuration types
//! - Error types

mod action;
mod cache;
mod config;
mod error;
mod selection;
mod topic;

pub use action::{Action, BatchAction, Resource};
pub use cache::{topic_keys, CacheKey};
pub use config::{config_dir, config_path, AppConfig, DefaultsConfig, ServerConfig};
pub use error::{ConfigError, RemoteError};
pub use selection::TableSelection;
pub use topic::{ClusterName, Partition, Replica, Topic, TopicName};
