//! The interrupt channel.
//!
//! The auto-hide "timer" is a stored deadline checked against the injected
//! clock. Showing an interrupt arms it; replacing one overwrites it, so a
//! stale window can never hide its successor early. The host drives expiry
//! from its own tick loop via [`InterruptChannel::poll`].

use chrono::{DateTime, Utc};
use serde::Serialize;
use stagecraft_core::clock::{Clock, deadline_after_ms};
use stagecraft_scene::{CharacterId, Emotion};

/// How long an interrupt stays on screen unless dismissed.
pub const AUTO_HIDE_WINDOW_MS: i64 = 5000;

/// A short character pop-in, unrelated to the active scene's graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interrupt {
    pub character_id: CharacterId,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion: Option<Emotion>,
}

/// Why an interrupt left the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HideReason {
    /// The caller dismissed it via [`InterruptChannel::hide`].
    Dismissed,
    /// Its auto-hide window elapsed.
    Expired,
    /// A newer interrupt took its place.
    Replaced,
}

/// A notification from the interrupt channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum InterruptSignal {
    /// An interrupt is now showing.
    Shown {
        interrupt: Interrupt,
        expires_at: DateTime<Utc>,
    },
    /// An interrupt left the screen.
    Hidden {
        interrupt: Interrupt,
        reason: HideReason,
    },
}

#[derive(Debug)]
struct LiveInterrupt {
    interrupt: Interrupt,
    expires_at: DateTime<Utc>,
}

/// Holds at most one live interrupt and its auto-hide deadline.
///
/// Fully decoupled from the scene state machine: showing or hiding an
/// interrupt never touches scene state, and an interrupt may show whether
/// or not a scene is active.
#[derive(Debug, Default)]
pub struct InterruptChannel {
    live: Option<LiveInterrupt>,
}

impl InterruptChannel {
    /// Creates an empty channel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows an interrupt, replacing any live one (last-write-wins, no
    /// queueing). The auto-hide deadline restarts from now.
    pub fn show(&mut self, interrupt: Interrupt, clock: &dyn Clock) -> Vec<InterruptSignal> {
        let mut signals = Vec::with_capacity(2);
        if let Some(previous) = self.live.take() {
            tracing::debug!(character_id = %previous.interrupt.character_id, "interrupt replaced");
            signals.push(InterruptSignal::Hidden {
                interrupt: previous.interrupt,
                reason: HideReason::Replaced,
            });
        }

        let expires_at = deadline_after_ms(clock.now(), AUTO_HIDE_WINDOW_MS);
        tracing::debug!(character_id = %interrupt.character_id, %expires_at, "interrupt shown");
        signals.push(InterruptSignal::Shown {
            interrupt: interrupt.clone(),
            expires_at,
        });
        self.live = Some(LiveInterrupt {
            interrupt,
            expires_at,
        });
        signals
    }

    /// Dismisses the live interrupt. Hiding when nothing is shown is a
    /// no-op, so this is safe to call unconditionally.
    pub fn hide(&mut self) -> Option<InterruptSignal> {
        let live = self.live.take()?;
        tracing::debug!(character_id = %live.interrupt.character_id, "interrupt dismissed");
        Some(InterruptSignal::Hidden {
            interrupt: live.interrupt,
            reason: HideReason::Dismissed,
        })
    }

    /// Expires the live interrupt once its window has elapsed. The host
    /// calls this from its frame/tick loop.
    pub fn poll(&mut self, clock: &dyn Clock) -> Option<InterruptSignal> {
        let live = self.live.as_ref()?;
        if clock.now() < live.expires_at {
            return None;
        }
        let live = self.live.take()?;
        tracing::debug!(character_id = %live.interrupt.character_id, "interrupt expired");
        Some(InterruptSignal::Hidden {
            interrupt: live.interrupt,
            reason: HideReason::Expired,
        })
    }

    /// The live interrupt, for rendering.
    #[must_use]
    pub fn current(&self) -> Option<&Interrupt> {
        self.live.as_ref().map(|l| &l.interrupt)
    }

    /// When the live interrupt will auto-hide.
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.live.as_ref().map(|l| l.expires_at)
    }
}
