//! Stagecraft — Attention Director bounded context.
//!
//! Marks one external UI target as emphasized so the rendering layer can
//! highlight it and dim the rest. The director only tracks identity: what a
//! target renders as, and how the dimming looks, belongs entirely to the
//! presentation layer observing it.

pub mod director;

pub use director::{AttentionDirector, FocusSignal, TargetId};
