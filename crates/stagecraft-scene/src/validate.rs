//! Scene graph validation.
//!
//! Activation refuses a scene whose graph is not internally consistent:
//! every referenced node id must resolve (absence of a link is the terminal
//! marker, never a dangling id), the start node must exist, and node ids
//! must be unique. Validation touches no state, so a rejected scene leaves
//! the engine exactly as it was.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::ids::{ChoiceId, NodeId, SceneId};
use crate::model::Scene;

/// A structural defect in an authored scene graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneGraphError {
    /// The scene has no dialogue nodes at all.
    #[error("scene {scene_id} has an empty dialogue list")]
    EmptyDialogue {
        /// The offending scene.
        scene_id: SceneId,
    },

    /// `start_node_id` names a node that is not in `dialogue`.
    #[error("scene {scene_id}: start node {start_node_id} is not defined")]
    MissingStartNode {
        scene_id: SceneId,
        start_node_id: NodeId,
    },

    /// Two dialogue nodes share an id.
    #[error("scene {scene_id}: duplicate node id {node_id}")]
    DuplicateNodeId { scene_id: SceneId, node_id: NodeId },

    /// Two choices on one node share an id.
    #[error("scene {scene_id}: node {node_id} has duplicate choice id {choice_id}")]
    DuplicateChoiceId {
        scene_id: SceneId,
        node_id: NodeId,
        choice_id: ChoiceId,
    },

    /// A node's `next_node_id` names a node that is not in `dialogue`.
    #[error("scene {scene_id}: node {node_id} links to undefined node {target}")]
    DanglingNextNode {
        scene_id: SceneId,
        node_id: NodeId,
        target: NodeId,
    },

    /// A choice's `next_node_id` names a node that is not in `dialogue`.
    #[error(
        "scene {scene_id}: choice {choice_id} on node {node_id} links to undefined node {target}"
    )]
    DanglingChoiceTarget {
        scene_id: SceneId,
        node_id: NodeId,
        choice_id: ChoiceId,
        target: NodeId,
    },
}

/// Checks the referential invariants of a scene graph.
///
/// Reports the first defect found, in authoring order.
///
/// # Errors
///
/// Returns a [`SceneGraphError`] describing the defect.
pub fn validate(scene: &Scene) -> Result<(), SceneGraphError> {
    if scene.dialogue.is_empty() {
        return Err(SceneGraphError::EmptyDialogue {
            scene_id: scene.id.clone(),
        });
    }

    let mut node_ids = BTreeSet::new();
    for node in &scene.dialogue {
        if !node_ids.insert(&node.id) {
            return Err(SceneGraphError::DuplicateNodeId {
                scene_id: scene.id.clone(),
                node_id: node.id.clone(),
            });
        }
    }

    if !node_ids.contains(&scene.start_node_id) {
        return Err(SceneGraphError::MissingStartNode {
            scene_id: scene.id.clone(),
            start_node_id: scene.start_node_id.clone(),
        });
    }

    for node in &scene.dialogue {
        if let Some(target) = &node.next_node_id
            && !node_ids.contains(target)
        {
            return Err(SceneGraphError::DanglingNextNode {
                scene_id: scene.id.clone(),
                node_id: node.id.clone(),
                target: target.clone(),
            });
        }

        let mut choice_ids = BTreeSet::new();
        for choice in &node.choices {
            if !choice_ids.insert(&choice.id) {
                return Err(SceneGraphError::DuplicateChoiceId {
                    scene_id: scene.id.clone(),
                    node_id: node.id.clone(),
                    choice_id: choice.id.clone(),
                });
            }
            if let Some(target) = &choice.next_node_id
                && !node_ids.contains(target)
            {
                return Err(SceneGraphError::DanglingChoiceTarget {
                    scene_id: scene.id.clone(),
                    node_id: node.id.clone(),
                    choice_id: choice.id.clone(),
                    target: target.clone(),
                });
            }
        }
    }

    Ok(())
}
