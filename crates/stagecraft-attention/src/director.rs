//! The attention director.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque identifier for an external UI target (for example a CSS
/// selector). Meaningful only to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetId(String);

impl TargetId {
    /// Wraps a rendering-layer target identifier.
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

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TargetId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// A notification from the attention director.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FocusSignal {
    /// A target took focus; `previous` is the one it displaced, if any.
    Focused {
        target: TargetId,
        previous: Option<TargetId>,
    },
    /// The focused target was cleared.
    Cleared { target: TargetId },
}

/// Tracks which single target is currently emphasized.
#[derive(Debug, Default)]
pub struct AttentionDirector {
    focused: Option<TargetId>,
}

impl AttentionDirector {
    /// Creates a director with nothing focused.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Focuses a target, displacing the previous one.
    ///
    /// Focusing the target that already holds focus returns `None` (no
    /// signal), so observers never see a clear/refocus flicker.
    pub fn focus(&mut self, target: TargetId) -> Option<FocusSignal> {
        if self.focused.as_ref() == Some(&target) {
            return None;
        }
        let previous = self.focused.replace(target.clone());
        tracing::debug!(target = %target, "focus moved");
        Some(FocusSignal::Focused { target, previous })
    }

    /// Clears the focused target. Idempotent.
    pub fn clear(&mut self) -> Option<FocusSignal> {
        let target = self.focused.take()?;
        tracing::debug!(target = %target, "focus cleared");
        Some(FocusSignal::Cleared { target })
    }

    /// Whether the given target currently holds focus.
    #[must_use]
    pub fn is_focused(&self, target: &TargetId) -> bool {
        self.focused.as_ref() == Some(target)
    }

    /// The focused target, for rendering/dimming.
    #[must_use]
    pub fn focused(&self) -> Option<&TargetId> {
        self.focused.as_ref()
    }
}
