//! Stagecraft — Character Runtime bounded context.
//!
//! Mutable per-character state for one scene activation: emotion, stage
//! position, and the speaking flag. The invariant maintained here is that
//! at most one character speaks at any moment, and it is always the speaker
//! of the current dialogue node.

pub mod cast;

pub use cast::{Cast, CharacterState};
