//! Stagecraft Core — shared abstractions.
//!
//! This crate defines the fundamental traits the engine crates depend on.
//! It contains no domain or infrastructure code.

pub mod clock;
