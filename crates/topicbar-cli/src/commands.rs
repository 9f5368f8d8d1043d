//! Command implementations.
//!
//! Each command returns `Ok(true)` on full success and `Ok(false)` when a
//! batch finished with failed members.

use std::sync::Arc;

use topicbar_client::KafkaUiClient;
use topicbar_core::{AppConfig, BatchAction, ClusterName, TableSelection, Topic};
use topicbar_engine::{
    AutoConfirm, BatchActionBar, BatchOutcome, Confirm, ControlState, EngineError, TopicCache,
};
use topicbar_rbac::RolesAccess;

use crate::cli::{cluster, Cli, Command};
use crate::error::CliError;
use crate::prompt::StdinConfirm;
use crate::render::{render_outcome, render_state, render_topics};

/// Process exit status: 0 on success, 1 if a batch member failed, 2 on error.
pub fn exit_status(result: &Result<bool, CliError>) -> u8 {
    match result {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(_) => 2,
    }
}

/// Build a selection from topic names, in the order given.
pub fn select_topics(
    cluster: &ClusterName,
    topics: &[Topic],
    names: &[String],
) -> Result<TableSelection, CliError> {
    let mut selection = TableSelection::new();
    for name in names {
        let topic = topics
            .iter()
            .find(|t| t.name.as_ref() == name.as_str())
            .ok_or_else(|| CliError::UnknownTopic {
                cluster: cluster.to_string(),
                topic: name.clone(),
            })?;
        selection.select(topic.clone());
    }
    Ok(selection)
}

/// Shared state of one invocation.
struct Session {
    client: KafkaUiClient,
    cache: Arc<TopicCache>,
    cluster: ClusterName,
}

impl Session {
    fn new(config: &AppConfig) -> Result<Self, CliError> {
        let cache = Arc::new(TopicCache::new());
        let client = KafkaUiClient::new(&config.server)?.with_cache(Arc::clone(&cache));
        Ok(Self {
            client,
            cache,
            cluster: cluster(config)?,
        })
    }

    async fn roles(&self) -> Result<RolesAccess, CliError> {
        let info = self.client.auth_info().await?;
        Ok(RolesAccess::from_auth_info(&info)?)
    }

    async fn selection(&self, names: &[String]) -> Result<TableSelection, CliError> {
        let topics = self.client.list_topics(&self.cluster).await?;
        select_topics(&self.cluster, &topics, names)
    }

    async fn action_bar(&self, confirm: Arc<dyn Confirm>) -> Result<BatchActionBar, CliError> {
        Ok(BatchActionBar::new(
            self.cluster.clone(),
            self.roles().await?,
            Arc::new(self.client.clone()),
            self.cache.clone(),
            confirm,
        ))
    }
}

/// Run the parsed command.
pub async fn run(cli: Cli, config: AppConfig) -> Result<bool, CliError> {
    let session = Session::new(&config)?;
    tracing::debug!(
        "Using {} cluster '{}'",
        session.client.base_url(),
        session.cluster
    );

    match cli.command {
        Command::List => {
            let topics = session.client.list_topics(&session.cluster).await?;
            println!("{}", render_topics(&topics));
            Ok(true)
        }
        Command::Status { topics } => {
            let selection = session.selection(&topics).await?;
            let bar = session.action_bar(Arc::new(AutoConfirm(false))).await?;
            println!("{}", render_state(&bar.state(&selection)));
            Ok(true)
        }
        Command::Delete { topics, yes } => {
            run_batch(&session, BatchAction::Delete, &topics, yes).await
        }
        Command::Purge { topics, yes } => {
            run_batch(&session, BatchAction::Purge, &topics, yes).await
        }
        Command::Copy { topic } => {
            let selection = session.selection(std::slice::from_ref(&topic)).await?;
            let bar = session.action_bar(Arc::new(AutoConfirm(false))).await?;
            let target = bar.copy_target(&selection)?;
            println!("{}", target.href(&session.cluster));
            Ok(true)
        }
    }
}

async fn run_batch(
    session: &Session,
    action: BatchAction,
    names: &[String],
    yes: bool,
) -> Result<bool, CliError> {
    let confirm: Arc<dyn Confirm> = if yes {
        Arc::new(AutoConfirm(true))
    } else {
        Arc::new(StdinConfirm)
    };
    let bar = session.action_bar(confirm).await?;
    let mut selection = session.selection(names).await?;

    let result = match action {
        BatchAction::Delete => bar.delete_selected(&mut selection).await,
        BatchAction::Purge => bar.purge_selected(&mut selection).await,
    };
    finish_batch(action, result)
}

/// Report a batch result. `Ok(false)` when some member failed.
fn finish_batch(
    action: BatchAction,
    result: Result<Option<BatchOutcome>, EngineError>,
) -> Result<bool, CliError> {
    match result {
        Ok(Some(outcome)) => {
            println!("{}", render_outcome(action, &outcome));
            Ok(outcome.all_succeeded())
        }
        Ok(None) => {
            println!("Cancelled.");
            Ok(true)
        }
        Err(EngineError::Unavailable {
            state: ControlState::Forbidden,
            ..
        }) => Err(CliError::Forbidden { action }),
        Err(e) => Err(e.into()),
    }
}
