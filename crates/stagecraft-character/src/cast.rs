//! The cast store.

use std::collections::BTreeMap;

use serde::Serialize;
use stagecraft_scene::{CharacterCue, CharacterId, Emotion, StagePosition};

/// Runtime state of one character during a scene activation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterState {
    pub emotion: Emotion,
    pub position: StagePosition,
    pub is_speaking: bool,
}

/// All character states for one scene activation, keyed by character id.
///
/// Built from the scene's cues on activation and recomputed on every node
/// change via [`Cast::set_speaker`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cast {
    states: BTreeMap<CharacterId, CharacterState>,
}

impl Cast {
    /// Builds the roster from a scene's character cues. Nobody speaks yet;
    /// the first speaker is assigned when the start node is entered.
    #[must_use]
    pub fn from_cues(cues: &[CharacterCue]) -> Self {
        let states = cues
            .iter()
            .map(|cue| {
                (
                    cue.character_id.clone(),
                    CharacterState {
                        emotion: cue.initial_emotion.clone(),
                        position: cue.initial_position,
                        is_speaking: false,
                    },
                )
            })
            .collect();
        Self { states }
    }

    /// Recomputes speaking flags for a node change.
    ///
    /// Clears every `is_speaking` flag, then marks `speaker` (when given and
    /// known to the roster) as speaking and applies the node's emotion
    /// override, if any. A speaker id outside the roster leaves nobody
    /// speaking, which keeps the at-most-one-speaker invariant intact.
    pub fn set_speaker(&mut self, speaker: Option<&CharacterId>, emotion: Option<&Emotion>) {
        for state in self.states.values_mut() {
            state.is_speaking = false;
        }

        let Some(speaker) = speaker else { return };
        if let Some(state) = self.states.get_mut(speaker) {
            state.is_speaking = true;
            if let Some(emotion) = emotion {
                state.emotion = emotion.clone();
            }
        } else {
            tracing::debug!(character_id = %speaker, "node speaker is not in the scene cast");
        }
    }

    /// Returns the state of one character.
    #[must_use]
    pub fn state(&self, character_id: &CharacterId) -> Option<&CharacterState> {
        self.states.get(character_id)
    }

    /// Returns the currently speaking character, if any.
    #[must_use]
    pub fn speaker(&self) -> Option<&CharacterId> {
        self.states
            .iter()
            .find(|(_, state)| state.is_speaking)
            .map(|(id, _)| id)
    }

    /// Iterates the roster in stable id order, for rendering.
    pub fn iter(&self) -> impl Iterator<Item = (&CharacterId, &CharacterState)> {
        self.states.iter()
    }

    /// Number of characters in the roster.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use stagecraft_scene::{CharacterCue, CharacterId, Emotion, StagePosition};

    use super::Cast;

    fn cue(id: &str, emotion: &str, position: StagePosition) -> CharacterCue {
        CharacterCue {
            character_id: CharacterId::from(id),
            initial_emotion: Emotion::from(emotion),
            initial_position: position,
            entrance_delay_ms: 0,
        }
    }

    fn sample_cast() -> Cast {
        Cast::from_cues(&[
            cue("mentor", "welcoming", StagePosition::Left),
            cue("rival", "smug", StagePosition::Right),
        ])
    }

    #[test]
    fn test_from_cues_starts_with_nobody_speaking() {
        // Act
        let cast = sample_cast();

        // Assert
        assert_eq!(cast.len(), 2);
        assert!(cast.speaker().is_none());
        let mentor = cast.state(&CharacterId::from("mentor")).unwrap();
        assert_eq!(mentor.emotion.as_str(), "welcoming");
        assert_eq!(mentor.position, StagePosition::Left);
    }

    #[test]
    fn test_set_speaker_moves_the_flag_between_characters() {
        // Arrange
        let mut cast = sample_cast();
        let mentor = CharacterId::from("mentor");
        let rival = CharacterId::from("rival");

        // Act
        cast.set_speaker(Some(&mentor), None);
        cast.set_speaker(Some(&rival), None);

        // Assert: exactly one speaker, and it is the latest one.
        assert_eq!(cast.speaker(), Some(&rival));
        assert!(!cast.state(&mentor).unwrap().is_speaking);
        assert_eq!(cast.iter().filter(|(_, s)| s.is_speaking).count(), 1);
    }

    #[test]
    fn test_set_speaker_applies_emotion_override_only_when_given() {
        // Arrange
        let mut cast = sample_cast();
        let mentor = CharacterId::from("mentor");

        // Act: override, then speak again without one.
        cast.set_speaker(Some(&mentor), Some(&Emotion::from("impressed")));
        cast.set_speaker(Some(&mentor), None);

        // Assert: the override sticks.
        assert_eq!(cast.state(&mentor).unwrap().emotion.as_str(), "impressed");
    }

    #[test]
    fn test_set_speaker_none_clears_everyone() {
        // Arrange
        let mut cast = sample_cast();
        cast.set_speaker(Some(&CharacterId::from("rival")), None);

        // Act
        cast.set_speaker(None, None);

        // Assert
        assert!(cast.speaker().is_none());
    }

    #[test]
    fn test_unknown_speaker_leaves_nobody_speaking() {
        // Arrange
        let mut cast = sample_cast();
        cast.set_speaker(Some(&CharacterId::from("mentor")), None);

        // Act: the node names a character with no cue.
        cast.set_speaker(Some(&CharacterId::from("narrator")), None);

        // Assert
        assert!(cast.speaker().is_none());
    }
}
