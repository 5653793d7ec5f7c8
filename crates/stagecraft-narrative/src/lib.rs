//! Stagecraft — Scene Traversal bounded context.
//!
//! The `ScenePlayer` owns the current node of one active scene: activation,
//! choice selection, auto-advance, skip, termination, and completion
//! detection. All operations are synchronous and caller-triggered; the
//! player never blocks and never touches a real timer.

pub mod decisions;
pub mod error;
pub mod player;
pub mod signals;
pub mod state;

pub use decisions::DecisionRecord;
pub use error::{EngineError, Precondition};
pub use player::ScenePlayer;
pub use signals::SceneSignal;
pub use state::SceneState;
