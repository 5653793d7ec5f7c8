//! Stagecraft — Interrupt Channel bounded context.
//!
//! Short character pop-ins that ride alongside (or without) an active
//! scene. At most one interrupt is live; a new one replaces it outright,
//! and each auto-expires after a fixed window unless dismissed first.

pub mod channel;

pub use channel::{AUTO_HIDE_WINDOW_MS, HideReason, Interrupt, InterruptChannel, InterruptSignal};
