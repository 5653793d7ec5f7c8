//! Runtime state of the active scene.

use chrono::{DateTime, Utc};
use serde::Serialize;
use stagecraft_character::Cast;
use stagecraft_scene::{NodeId, SceneId};

use crate::decisions::DecisionRecord;

/// Mutable state for one scene activation.
///
/// Created by `activate`, mutated on every transition, and discarded on
/// completion or termination. The engine never persists it; callers wanting
/// history must use the completion signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SceneState {
    /// The active scene.
    pub scene_id: SceneId,
    /// The node currently holding the stage.
    pub current_node_id: NodeId,
    /// Every node entered so far, in traversal order (start node first).
    pub visited: Vec<NodeId>,
    /// Per-character runtime state.
    pub cast: Cast,
    /// Choices made so far in this activation.
    pub decisions: DecisionRecord,
    /// When this activation began.
    pub started_at: DateTime<Utc>,
}
