//! Bulk action orchestration for topic tables.
//!
//! This crate turns a table selection into gated, confirmed batch calls:
//! - `resolver` - selection rows to topic names
//! - `gate` - per-action permission gates, memoized on their inputs
//! - `executor` - concurrent dispatch with a single join barrier
//! - `copy_path` - navigation target for "copy selected topic"
//! - `action_bar` - the three controls composed over one selection
//!
//! ## Flow
//!
//! ```text
//! TableSelection ──► resolve() ──► MemoizedGate ──► ActionBarState
//!                        │
//!                        └──► Confirm ──► BatchExecutor ──► reset / invalidate
//! ```
//!
//! Remote calls, confirmation and caching are collaborators behind the
//! `TopicAdmin`, `Confirm` and `QueryCache` traits.

pub mod action_bar;
pub mod admin;
pub mod cache;
pub mod confirm;
pub mod copy_path;
pub mod error;
pub mod executor;
pub mod gate;
pub mod resolver;

#[cfg(test)]
mod mock;

pub use action_bar::{ActionBarState, BatchActionBar, ControlState};
pub use admin::TopicAdmin;
pub use cache::{QueryCache, TopicCache};
pub use confirm::{AutoConfirm, Confirm};
pub use copy_path::{copy_fields, derive_copy_target, CopyTarget, TOPIC_COPY_RELATIVE_PATH};
pub use error::EngineError;
pub use executor::{execute, BatchExecutor, BatchOutcome};
pub use gate::{is_batch_permitted, MemoizedGate};
pub use resolver::resolve;

// Re-export core types for convenience
pub use topicbar_core::{BatchAction, ClusterName, TableSelection, Topic, TopicName};
