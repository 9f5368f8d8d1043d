//! Selection to topic names.

use topicbar_core::{TableSelection, TopicName};

/// Topic names of the selected rows, in row order.
pub fn resolve(selection: &TableSelection) -> Vec<TopicName> {
    selection.rows().iter().map(|row| row.name.clone()).collect()
}
