//! The decision record.

use std::collections::BTreeMap;

use serde::Serialize;
use stagecraft_scene::{ChoiceId, NodeId};

/// Choices made during one scene activation, keyed by the node they were
/// made on.
///
/// Lives for exactly one activation: reset when a scene activates, handed to
/// the caller inside the completion signal, never persisted by the engine.
/// Revisiting a node on a cyclic path overwrites that node's entry, matching
/// assignment semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DecisionRecord {
    entries: BTreeMap<NodeId, ChoiceId>,
}

impl DecisionRecord {
    /// Records the choice selected on a node.
    pub fn record(&mut self, node_id: NodeId, choice_id: ChoiceId) {
        self.entries.insert(node_id, choice_id);
    }

    /// Returns the choice recorded on a node, if any.
    #[must_use]
    pub fn get(&self, node_id: &NodeId) -> Option<&ChoiceId> {
        self.entries.get(node_id)
    }

    /// Number of nodes with a recorded choice.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no choice has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates recorded decisions in stable node-id order.
    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, &ChoiceId)> {
        self.entries.iter()
    }
}
