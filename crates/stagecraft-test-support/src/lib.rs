//! Shared test mocks and fixtures for the Stagecraft engine.

mod clock;
mod scenes;
mod tracing_init;

pub use clock::{FixedClock, SteppingClock};
pub use scenes::{auto_node, branching_scene, choice, choice_node, cue, monologue_scene, scene};
pub use tracing_init::init_test_tracing;
