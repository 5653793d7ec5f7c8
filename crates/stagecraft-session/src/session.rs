//! The per-session engine facade.

use std::sync::Arc;

use stagecraft_attention::{AttentionDirector, FocusSignal, TargetId};
use stagecraft_core::clock::Clock;
use stagecraft_interrupt::{Interrupt, InterruptChannel, InterruptSignal};
use stagecraft_narrative::{EngineError, ScenePlayer, SceneSignal, SceneState};
use stagecraft_scene::{CharacterId, ChoiceId, DialogueNode, Scene, SceneId};

use crate::events::{EventSink, Notification, StageEvent};
use crate::registry::{CharacterDescriptor, CharacterRegistry};

/// One user session's narrative engine.
///
/// Owns the scene player, interrupt channel, and attention director, plus
/// the injected clock and character registry. Constructed once per session
/// and passed by reference to whatever needs it; there is no ambient
/// singleton. Every operation both returns its signals to the caller and
/// publishes them to subscribed sinks, in emission order.
pub struct StageSession {
    player: ScenePlayer,
    interrupts: InterruptChannel,
    attention: AttentionDirector,
    registry: CharacterRegistry,
    clock: Arc<dyn Clock>,
    sinks: Vec<Box<dyn EventSink>>,
}

impl StageSession {
    /// Creates a session with the given clock and character registry.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, registry: CharacterRegistry) -> Self {
        Self {
            player: ScenePlayer::new(),
            interrupts: InterruptChannel::new(),
            attention: AttentionDirector::new(),
            registry,
            clock,
            sinks: Vec::new(),
        }
    }

    /// Subscribes a sink to all session notifications.
    pub fn subscribe(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
        tracing::debug!(subscribers = self.sinks.len(), "event sink subscribed");
    }

    fn publish(&self, events: impl IntoIterator<Item = StageEvent>) {
        for event in events {
            let notification = Notification {
                occurred_at: self.clock.now(),
                event,
            };
            for sink in &self.sinks {
                sink.publish(&notification);
            }
        }
    }

    // --- Scene traversal -------------------------------------------------

    /// Activates a scene. See [`ScenePlayer::activate`].
    ///
    /// # Errors
    ///
    /// Propagates [`EngineError`] from the player; nothing is published on
    /// failure.
    pub fn activate_scene(&mut self, scene: Scene) -> Result<Vec<SceneSignal>, EngineError> {
        let signals = self.player.activate(scene, self.clock.as_ref())?;
        self.publish(signals.iter().cloned().map(StageEvent::Scene));
        Ok(signals)
    }

    /// Selects a choice on the current node. See [`ScenePlayer::select_choice`].
    ///
    /// # Errors
    ///
    /// Propagates [`EngineError`]; a failed precondition publishes nothing.
    pub fn select_choice(&mut self, choice_id: &ChoiceId) -> Result<Vec<SceneSignal>, EngineError> {
        let signals = self.player.select_choice(choice_id, self.clock.as_ref())?;
        self.publish(signals.iter().cloned().map(StageEvent::Scene));
        Ok(signals)
    }

    /// Advances past a choice-less node. See [`ScenePlayer::advance`].
    ///
    /// # Errors
    ///
    /// Propagates [`EngineError`]; a failed precondition publishes nothing.
    pub fn advance(&mut self) -> Result<Vec<SceneSignal>, EngineError> {
        let signals = self.player.advance(self.clock.as_ref())?;
        self.publish(signals.iter().cloned().map(StageEvent::Scene));
        Ok(signals)
    }

    /// Skips a skippable scene to completion. See [`ScenePlayer::skip`].
    ///
    /// # Errors
    ///
    /// Propagates [`EngineError`]; a failed precondition publishes nothing.
    pub fn skip(&mut self) -> Result<Vec<SceneSignal>, EngineError> {
        let signals = self.player.skip(self.clock.as_ref())?;
        self.publish(signals.iter().cloned().map(StageEvent::Scene));
        Ok(signals)
    }

    /// Discards the active scene without completion. Idempotent.
    pub fn terminate_scene(&mut self) -> Option<SceneId> {
        self.player.terminate()
    }

    // --- Interrupts -------------------------------------------------------

    /// Shows an interrupt, replacing any live one.
    pub fn show_interrupt(&mut self, interrupt: Interrupt) -> Vec<InterruptSignal> {
        let signals = self.interrupts.show(interrupt, self.clock.as_ref());
        self.publish(signals.iter().cloned().map(StageEvent::Interrupt));
        signals
    }

    /// Dismisses the live interrupt. Idempotent.
    pub fn hide_interrupt(&mut self) -> Option<InterruptSignal> {
        let signal = self.interrupts.hide();
        self.publish(signal.iter().cloned().map(StageEvent::Interrupt));
        signal
    }

    /// Drives time-based behavior; the host calls this from its tick loop.
    /// Currently that is interrupt auto-hide expiry.
    pub fn tick(&mut self) -> Option<InterruptSignal> {
        let signal = self.interrupts.poll(self.clock.as_ref());
        self.publish(signal.iter().cloned().map(StageEvent::Interrupt));
        signal
    }

    // --- Attention --------------------------------------------------------

    /// Focuses a UI target, displacing the previous one.
    pub fn focus(&mut self, target: TargetId) -> Option<FocusSignal> {
        let signal = self.attention.focus(target);
        self.publish(signal.iter().cloned().map(StageEvent::Focus));
        signal
    }

    /// Clears the focused target. Idempotent.
    pub fn clear_focus(&mut self) -> Option<FocusSignal> {
        let signal = self.attention.clear();
        self.publish(signal.iter().cloned().map(StageEvent::Focus));
        signal
    }

    // --- Read access for rendering ---------------------------------------

    /// The dialogue node currently holding the stage.
    #[must_use]
    pub fn current_node(&self) -> Option<&DialogueNode> {
        self.player.current_node()
    }

    /// Runtime state of the active scene.
    #[must_use]
    pub fn scene_state(&self) -> Option<&SceneState> {
        self.player.state()
    }

    /// The live interrupt, if any.
    #[must_use]
    pub fn current_interrupt(&self) -> Option<&Interrupt> {
        self.interrupts.current()
    }

    /// The focused UI target, if any.
    #[must_use]
    pub fn focused_target(&self) -> Option<&TargetId> {
        self.attention.focused()
    }

    /// Presentation metadata for a character.
    #[must_use]
    pub fn descriptor(&self, character_id: &CharacterId) -> Option<&CharacterDescriptor> {
        self.registry.get(character_id)
    }

    /// The full character registry.
    #[must_use]
    pub fn registry(&self) -> &CharacterRegistry {
        &self.registry
    }
}
