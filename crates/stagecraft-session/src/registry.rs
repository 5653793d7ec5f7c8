//! The character descriptor registry.
//!
//! A pure lookup table from character id to presentation metadata, injected
//! at the presentation boundary. The engine itself only ever stores and
//! forwards character ids; this table is how the rendering layer resolves
//! them to something drawable.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use stagecraft_scene::CharacterId;

/// Presentation metadata for one character. Opaque to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterDescriptor {
    /// Name shown in dialogue headers.
    pub display_name: String,
    /// Sprite-set selector for the rendering layer.
    pub sprite_key: String,
    /// Optional byline (for example `"Your mentor"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Immutable map from character id to descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterRegistry {
    entries: BTreeMap<CharacterId, CharacterDescriptor>,
}

impl CharacterRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a descriptor, builder-style.
    #[must_use]
    pub fn with(mut self, character_id: CharacterId, descriptor: CharacterDescriptor) -> Self {
        self.entries.insert(character_id, descriptor);
        self
    }

    /// Looks up the descriptor for a character.
    #[must_use]
    pub fn get(&self, character_id: &CharacterId) -> Option<&CharacterDescriptor> {
        self.entries.get(character_id)
    }

    /// Iterates descriptors in stable id order.
    pub fn iter(&self) -> impl Iterator<Item = (&CharacterId, &CharacterDescriptor)> {
        self.entries.iter()
    }

    /// Number of registered characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(CharacterId, CharacterDescriptor)> for CharacterRegistry {
    fn from_iter<T: IntoIterator<Item = (CharacterId, CharacterDescriptor)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
