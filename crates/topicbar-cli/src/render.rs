//! Plain-text output.

use topicbar_core::{BatchAction, Topic};
use topicbar_engine::{ActionBarState, BatchOutcome};

/// Topic table: name, partitions, replication factor, internal flag.
pub fn render_topics(topics: &[Topic]) -> String {
    let name_width = topics
        .iter()
        .map(|t| t.name.0.len())
        .chain(std::iter::once("NAME".len()))
        .max()
        .unwrap_or(0);

    let mut lines = vec![format!(
        "{:<name_width$}  {:<10}  {:<11}  {}",
        "NAME", "PARTITIONS", "REPLICATION", "INTERNAL"
    )];
    for topic in topics {
        let replication = topic
            .replication_factor
            .map_or_else(|| "-".to_string(), |r| r.to_string());
        lines.push(format!(
            "{:<name_width$}  {:<10}  {:<11}  {}",
            topic.name,
            topic.partition_total(),
            replication,
            if topic.internal { "yes" } else { "no" }
        ));
    }

    lines
        .iter()
        .map(|l| l.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per control.
pub fn render_state(state: &ActionBarState) -> String {
    [
        (BatchAction::Delete.label(), state.delete),
        ("Copy selected topic", state.copy),
        (BatchAction::Purge.label(), state.purge),
    ]
    .iter()
    .map(|(label, control)| format!("{}: {}", label, control))
    .collect::<Vec<_>>()
    .join("\n")
}

/// Summary of a finished batch.
pub fn render_outcome(action: BatchAction, outcome: &BatchOutcome) -> String {
    let verb = match action {
        BatchAction::Delete => "Deleted",
        BatchAction::Purge => "Purged messages of",
    };
    let mut lines = vec![format!(
        "{} {} of {} topics",
        verb,
        outcome.succeeded.len(),
        outcome.len()
    )];
    for (topic, error) in &outcome.failed {
        lines.push(format!("  failed {}: {}", topic, error));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use topicbar_core::RemoteError;
    use topicbar_engine::ControlState;

    #[test]
    fn test_render_topics() {
        let mut orders = Topic::new("orders");
        orders.partition_count = Some(3);
        orders.replication_factor = Some(2);
        let mut offsets = Topic::new("__consumer_offsets");
        offsets.partition_count = Some(50);
        offsets.internal = true;

        insta::assert_snapshot!(render_topics(&[orders, offsets]), @r"
        NAME                PARTITIONS  REPLICATION  INTERNAL
        orders              3           2            no
        __consumer_offsets  50          -            yes
        ");
    }

    #[test]
    fn test_render_state() {
        let state = ActionBarState {
            delete: ControlState::Enabled,
            copy: ControlState::Disabled,
            purge: ControlState::Forbidden,
        };
        insta::assert_snapshot!(render_state(&state), @r"
        Delete selected topics: enabled
        Copy selected topic: disabled
        Purge messages of selected topics: forbidden
        ");
    }

    #[test]
    fn test_render_partial_outcome() {
        let outcome = BatchOutcome {
            succeeded: vec!["orders".into(), "audit".into()],
            failed: vec![(
                "events".into(),
                RemoteError::Http {
                    status: 500,
                    message: "broker unavailable".to_string(),
                },
            )],
        };
        insta::assert_snapshot!(render_outcome(BatchAction::Purge, &outcome), @r"
        Purged messages of 2 of 3 topics
          failed events: HTTP 500: broker unavailable
        ");
    }
}
