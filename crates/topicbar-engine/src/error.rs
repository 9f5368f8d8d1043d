//! Engine errors.

use thiserror::Error;
use topicbar_core::BatchAction;

use crate::action_bar::ControlState;

/// Errors from the action bar - surfaced to the caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The control for this action is not enabled for the current selection.
    #[error("Cannot {action} selected topics: control is {state}")]
    Unavailable {
        action: BatchAction,
        state: ControlState,
    },

    /// Copy needs exactly one selected topic.
    #[error("Copy needs exactly one selected topic, got {0}")]
    CopyNeedsSingleRow(usize),
}
