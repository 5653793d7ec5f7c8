//! Stagecraft — Session facade.
//!
//! One [`StageSession`] per user session composes the scene player, the
//! interrupt channel, and the attention director behind a single explicit
//! instance: constructed once, passed by reference to whatever needs it,
//! and observed through the [`EventSink`] subscription contract. There is
//! no ambient singleton.

pub mod events;
pub mod registry;
pub mod session;

pub use events::{EventSink, Notification, StageEvent};
pub use registry::{CharacterDescriptor, CharacterRegistry};
pub use session::StageSession;

pub use stagecraft_attention::{AttentionDirector, FocusSignal, TargetId};
pub use stagecraft_character::{Cast, CharacterState};
pub use stagecraft_interrupt::{
    AUTO_HIDE_WINDOW_MS, HideReason, Interrupt, InterruptChannel, InterruptSignal,
};
pub use stagecraft_narrative::{
    DecisionRecord, EngineError, Precondition, ScenePlayer, SceneSignal, SceneState,
};
pub use stagecraft_scene::{
    CharacterCue, CharacterId, ChoiceId, DialogueChoice, DialogueNode, Emotion, NodeId, Scene,
    SceneGraphError, SceneId, StagePosition, Tone, validate,
};
