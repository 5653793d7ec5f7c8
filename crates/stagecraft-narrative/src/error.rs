//! Engine error types.
//!
//! Everything here is local and synchronous. Precondition violations are the
//! "reported no-op" class: the operation changed nothing and the caller is
//! told why, without anything unwinding into rendering code.

use thiserror::Error;

use stagecraft_scene::{ChoiceId, NodeId, SceneGraphError, SceneId};

/// A failed precondition on a player operation. State is never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Precondition {
    /// A traversal operation was called with no active scene.
    #[error("no scene is active")]
    NoActiveScene,

    /// `advance` was called on a node that waits for a choice.
    #[error("node {node_id} has choices and cannot auto-advance")]
    AutoAdvanceOnChoiceNode {
        /// The current node.
        node_id: NodeId,
    },

    /// The selected choice is not on the current node.
    #[error("node {node_id} has no choice {choice_id}")]
    UnknownChoice { node_id: NodeId, choice_id: ChoiceId },

    /// The selected choice is visible but disabled.
    #[error("choice {choice_id} on node {node_id} is disabled")]
    DisabledChoice { node_id: NodeId, choice_id: ChoiceId },

    /// `skip` was called on a scene authored as unskippable.
    #[error("scene {scene_id} does not allow skipping")]
    SkipNotAllowed { scene_id: SceneId },
}

/// Top-level engine error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The scene failed graph validation; activation rejected it outright.
    #[error("invalid scene graph: {0}")]
    InvalidSceneGraph(#[from] SceneGraphError),

    /// A scene is already active. The caller must end it first; activation
    /// requests are rejected, never queued.
    #[error("scene {active_scene_id} is still active")]
    DoubleActivation {
        /// The scene currently holding the stage.
        active_scene_id: SceneId,
    },

    /// A no-op precondition failure.
    #[error("precondition violated: {0}")]
    Precondition(#[from] Precondition),
}
