//! Command-line front end for topicbar.
//!
//! The binary in `main.rs` only wires these modules together;
//! everything testable lives here.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod prompt;
pub mod render;

pub use cli::{Cli, Command};
pub use error::CliError;
