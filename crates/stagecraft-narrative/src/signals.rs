//! Signals emitted by the scene player.
//!
//! Signals are returned from the operation that produced them, in emission
//! order. Character state is always recomputed before the `NodeEntered`
//! signal is produced, so an observer never pairs a node id with a stale
//! speaker.

use serde::Serialize;
use stagecraft_scene::{DialogueChoice, NodeId, SceneId};

use crate::decisions::DecisionRecord;

/// A traversal notification for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SceneSignal {
    /// A node took the stage (fired on activation and on every transition).
    NodeEntered { scene_id: SceneId, node_id: NodeId },

    /// A choice was selected and recorded. Fired once per selection, before
    /// the transition it causes.
    DecisionRecorded {
        scene_id: SceneId,
        node_id: NodeId,
        choice: DialogueChoice,
    },

    /// The scene reached a terminal node (or was skipped). Carries the full
    /// decision record of the activation and its wall-clock duration.
    SceneCompleted {
        scene_id: SceneId,
        decisions: DecisionRecord,
        duration_ms: i64,
    },
}
