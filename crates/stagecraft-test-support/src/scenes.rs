//! Canned scene fixtures.
//!
//! Small builders so tests can assemble graphs inline, plus the two stock
//! scenes most suites use: a branching three-node scene and a linear
//! monologue.

use stagecraft_scene::{
    CharacterCue, CharacterId, DialogueChoice, DialogueNode, Emotion, NodeId, Scene, StagePosition,
    Tone,
};

/// A character cue with a neutral starting emotion.
#[must_use]
pub fn cue(character_id: &str, position: StagePosition) -> CharacterCue {
    CharacterCue {
        character_id: CharacterId::from(character_id),
        initial_emotion: Emotion::from("neutral"),
        initial_position: position,
        entrance_delay_ms: 0,
    }
}

/// An auto-advancing node (terminal when `next` is `None`).
#[must_use]
pub fn auto_node(id: &str, speaker: &str, text: &str, next: Option<&str>) -> DialogueNode {
    DialogueNode {
        id: NodeId::from(id),
        character_id: Some(CharacterId::from(speaker)),
        text: text.to_owned(),
        emotion: None,
        choices: Vec::new(),
        next_node_id: next.map(NodeId::from),
        delay_ms: None,
    }
}

/// A node that waits for one of the given choices.
#[must_use]
pub fn choice_node(id: &str, speaker: &str, text: &str, choices: Vec<DialogueChoice>) -> DialogueNode {
    DialogueNode {
        id: NodeId::from(id),
        character_id: Some(CharacterId::from(speaker)),
        text: text.to_owned(),
        emotion: None,
        choices,
        next_node_id: None,
        delay_ms: None,
    }
}

/// An enabled, neutral-tone choice.
#[must_use]
pub fn choice(id: &str, text: &str, next: Option<&str>) -> DialogueChoice {
    DialogueChoice {
        id: id.into(),
        text: text.to_owned(),
        tone: Tone::Neutral,
        next_node_id: next.map(NodeId::from),
        disabled: false,
        disabled_reason: None,
    }
}

/// A skippable scene with the given cast and dialogue.
#[must_use]
pub fn scene(id: &str, characters: Vec<CharacterCue>, dialogue: Vec<DialogueNode>) -> Scene {
    let start = dialogue
        .first()
        .map_or_else(|| NodeId::from("start"), |n| n.id.clone());
    Scene {
        id: id.into(),
        name: format!("Fixture: {id}"),
        background_kind: String::from("office"),
        ambience_kind: String::from("quiet"),
        screen_effect: None,
        can_skip: true,
        start_node_id: start,
        characters,
        dialogue,
    }
}

/// The stock branching scene:
/// `intro → (c1 → warm-up | c2 → cold-open)`, each branch auto-advancing to
/// its terminal node.
#[must_use]
pub fn branching_scene() -> Scene {
    scene(
        "branching",
        vec![
            cue("mentor", StagePosition::Left),
            cue("founder", StagePosition::Right),
        ],
        vec![
            choice_node(
                "intro",
                "mentor",
                "How do you want to open the meeting?",
                vec![
                    choice("c1", "Ease into it.", Some("warm-up")),
                    choice("c2", "Straight to numbers.", Some("cold-open")),
                ],
            ),
            auto_node("warm-up", "founder", "So, how was your weekend?", None),
            auto_node("cold-open", "founder", "Revenue is up twelve percent.", None),
        ],
    )
}

/// The stock linear scene: three auto-advancing beats by a single speaker.
#[must_use]
pub fn monologue_scene() -> Scene {
    scene(
        "monologue",
        vec![cue("mentor", StagePosition::Center)],
        vec![
            auto_node("one", "mentor", "First things first.", Some("two")),
            auto_node("two", "mentor", "Cash flow is oxygen.", Some("three")),
            auto_node("three", "mentor", "Now go close the books.", None),
        ],
    )
}
