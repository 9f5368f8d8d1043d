//! Table row selection.

use crate::topic::{Topic, TopicName};

/// Ordered multi-row selection over a topic table.
///
/// Owned by the table. Rows keep the order in which they were selected;
/// selecting an already-selected name is a no-op.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableSelection {
    rows: Vec<Topic>,
}

impl TableSelection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a selection from rows, dropping repeated names.
    pub fn from_rows(rows: impl IntoIterator<Item = Topic>) -> Self {
        let mut selection = Self::new();
        for row in rows {
            selection.select(row);
        }
        selection
    }

    /// Add a row to the selection.
    ///
    /// Returns false if a row with the same name was already selected.
    pub fn select(&mut self, topic: Topic) -> bool {
        if self.contains(&topic.name) {
            return false;
        }
        self.rows.push(topic);
        true
    }

    /// Select the row if absent, deselect it if present.
    pub fn toggle(&mut self, topic: Topic) {
        if let Some(pos) = self.rows.iter().position(|r| r.name == topic.name) {
            self.rows.remove(pos);
        } else {
            self.rows.push(topic);
        }
    }

    /// Check whether a topic is selected.
    pub fn contains(&self, name: &TopicName) -> bool {
        self.rows.iter().any(|r| &r.name == name)
    }

    /// Selected rows in selection order.
    pub fn rows(&self) -> &[Topic] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Clear the selection.
    pub fn reset(&mut self) {
        self.rows.clear();
    }
}
