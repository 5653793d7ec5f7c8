//! The immutable scene graph model.
//!
//! Scenes arrive from external authoring (camelCase JSON mirroring the
//! authored literals) and are treated as read-only data for the lifetime of
//! the process. Traversal semantics live in `stagecraft-narrative`; this
//! module only describes the shape.

use serde::{Deserialize, Serialize};

use crate::ids::{CharacterId, ChoiceId, Emotion, NodeId, SceneId};

/// Where a character stands on the stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StagePosition {
    Left,
    Center,
    Right,
    Offscreen,
}

/// The conversational register of a choice, recorded alongside the decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Polite,
    Neutral,
    Aggressive,
}

/// A character's static placement for one scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterCue {
    pub character_id: CharacterId,
    pub initial_emotion: Emotion,
    pub initial_position: StagePosition,
    /// Presentation hint: how long to hold the entrance animation.
    #[serde(default)]
    pub entrance_delay_ms: u64,
}

/// A selectable option on a dialogue node.
///
/// A disabled choice stays visible (with its reason) but selecting it is a
/// reported no-op: no transition, no recorded decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogueChoice {
    pub id: ChoiceId,
    pub text: String,
    pub tone: Tone,
    /// Where this choice redirects traversal; absent falls back to the
    /// node's own `next_node_id`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_node_id: Option<NodeId>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled_reason: Option<String>,
}

/// One beat of dialogue.
///
/// A node with no choices auto-advances via `next_node_id` (terminal when
/// absent); a node with choices only advances on explicit selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogueNode {
    pub id: NodeId,
    /// The speaking character, if this beat has a speaker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_id: Option<CharacterId>,
    pub text: String,
    /// Emotion override applied to the speaker on entry; absent leaves the
    /// speaker's emotion unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion: Option<Emotion>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<DialogueChoice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_node_id: Option<NodeId>,
    /// Presentation hint: pacing delay before the text reveal completes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_ms: Option<u64>,
}

impl DialogueNode {
    /// Whether this node waits for an explicit choice selection.
    #[must_use]
    pub fn has_choices(&self) -> bool {
        !self.choices.is_empty()
    }

    /// Looks up a choice on this node by id.
    #[must_use]
    pub fn choice(&self, choice_id: &ChoiceId) -> Option<&DialogueChoice> {
        self.choices.iter().find(|c| &c.id == choice_id)
    }
}

/// An externally authored, immutable description of a playable scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub id: SceneId,
    pub name: String,
    /// Backdrop selector, opaque to the engine (for example `"office"`).
    pub background_kind: String,
    /// Ambient audio selector, opaque to the engine.
    pub ambience_kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screen_effect: Option<String>,
    #[serde(default)]
    pub can_skip: bool,
    pub start_node_id: NodeId,
    #[serde(default)]
    pub characters: Vec<CharacterCue>,
    pub dialogue: Vec<DialogueNode>,
}

impl Scene {
    /// Looks up a dialogue node by id.
    #[must_use]
    pub fn node(&self, node_id: &NodeId) -> Option<&DialogueNode> {
        self.dialogue.iter().find(|n| &n.id == node_id)
    }

    /// Deserializes an authored scene from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error when the document does not
    /// match the scene shape. Referential integrity is checked separately by
    /// [`crate::validate::validate`].
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::{Scene, StagePosition, Tone};
    use crate::ids::NodeId;

    const AUTHORED_SCENE: &str = r#"{
        "id": "first-pitch",
        "name": "The First Pitch",
        "backgroundKind": "office",
        "ambienceKind": "morning-bustle",
        "canSkip": true,
        "startNodeId": "greeting",
        "characters": [
            {
                "characterId": "mentor",
                "initialEmotion": "welcoming",
                "initialPosition": "left",
                "entranceDelayMs": 400
            }
        ],
        "dialogue": [
            {
                "id": "greeting",
                "characterId": "mentor",
                "text": "Ready to pitch your idea?",
                "choices": [
                    { "id": "yes", "text": "Absolutely.", "tone": "polite", "nextNodeId": "pitch" },
                    { "id": "later", "text": "Not yet.", "tone": "neutral", "disabled": true, "disabledReason": "Finish the tutorial first" }
                ]
            },
            {
                "id": "pitch",
                "characterId": "mentor",
                "text": "Then the floor is yours.",
                "emotion": "impressed"
            }
        ]
    }"#;

    #[test]
    fn test_from_json_str_parses_authored_scene() {
        // Act
        let scene = Scene::from_json_str(AUTHORED_SCENE).unwrap();

        // Assert
        assert_eq!(scene.id.as_str(), "first-pitch");
        assert!(scene.can_skip);
        assert_eq!(scene.characters.len(), 1);
        assert_eq!(scene.characters[0].initial_position, StagePosition::Left);
        assert_eq!(scene.characters[0].entrance_delay_ms, 400);

        let greeting = scene.node(&NodeId::from("greeting")).unwrap();
        assert!(greeting.has_choices());
        assert_eq!(greeting.choices[0].tone, Tone::Polite);
        assert!(greeting.choices[1].disabled);
        assert_eq!(
            greeting.choices[1].disabled_reason.as_deref(),
            Some("Finish the tutorial first")
        );

        let pitch = scene.node(&NodeId::from("pitch")).unwrap();
        assert!(!pitch.has_choices());
        assert!(pitch.next_node_id.is_none());
        assert_eq!(pitch.emotion.as_ref().map(|e| e.as_str()), Some("impressed"));
    }

    #[test]
    fn test_node_lookup_misses_unknown_id() {
        // Arrange
        let scene = Scene::from_json_str(AUTHORED_SCENE).unwrap();

        // Act / Assert
        assert!(scene.node(&NodeId::from("epilogue")).is_none());
    }
}
