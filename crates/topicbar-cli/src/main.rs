//! topicbar - bulk topic actions for Kafka UI.
//!
//! Parses arguments, sets up logging, loads configuration and runs
//! the command.

use clap::Parser;
use std::process::ExitCode;

use topicbar_cli::{commands, logging, Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let filter_handle = logging::init();

    let result = match cli.resolve_config() {
        Ok(config) => {
            if let (Some(handle), Some(level)) = (&filter_handle, config.log_level.as_deref()) {
                logging::apply_log_level(handle, level);
            }
            commands::run(cli, config).await
        }
        Err(e) => Err(e),
    };

    if let Err(e) = &result {
        eprintln!("error: {}", e);
    }
    ExitCode::from(commands::exit_status(&result))
}
