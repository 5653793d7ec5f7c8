//! Typed identifiers for scene data.
//!
//! All ids are caller-authored strings carried opaquely by the engine.
//! Newtypes keep a node id from being handed where a choice id belongs.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps an authored identifier.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id!(
    /// Identifier of an authored scene.
    SceneId
);
string_id!(
    /// Identifier of a dialogue node within a scene.
    NodeId
);
string_id!(
    /// Identifier of a choice on a dialogue node.
    ChoiceId
);
string_id!(
    /// Identifier of a character referenced by cues and nodes.
    CharacterId
);

/// An authored emotion label (for example `"confident"` or `"worried"`).
///
/// The engine stores and forwards emotions without interpreting them; the
/// vocabulary belongs to the scene authors and the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Emotion(String);

impl Emotion {
    /// Wraps an authored emotion label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Returns the label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Emotion {
    fn from(label: &str) -> Self {
        Self(label.to_owned())
    }
}
