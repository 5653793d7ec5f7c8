//! Stagecraft — Scene Graph bounded context.
//!
//! The immutable description of a playable scene: dialogue nodes, choices,
//! character cues, and ambience hints. Scenes are authored externally and
//! deserialized here; the engine never mutates them. The validator guards
//! the referential invariants before a scene may be activated.

pub mod ids;
pub mod model;
pub mod validate;

pub use ids::{CharacterId, ChoiceId, Emotion, NodeId, SceneId};
pub use model::{CharacterCue, DialogueChoice, DialogueNode, Scene, StagePosition, Tone};
pub use validate::{SceneGraphError, validate};
