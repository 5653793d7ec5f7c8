//! The session's outbound event contract.

use chrono::{DateTime, Utc};
use serde::Serialize;
use stagecraft_attention::FocusSignal;
use stagecraft_interrupt::InterruptSignal;
use stagecraft_narrative::SceneSignal;

/// Any notification a session can emit, across all three components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum StageEvent {
    Scene(SceneSignal),
    Interrupt(InterruptSignal),
    Focus(FocusSignal),
}

/// A timestamped event as delivered to subscribers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    /// Session-clock time at delivery.
    pub occurred_at: DateTime<Utc>,
    pub event: StageEvent,
}

/// A subscriber to session notifications.
///
/// Delivery is synchronous and in emission order, on the caller's thread,
/// before the operation that produced the event returns. The engine is
/// single-threaded and cooperative, so sinks may use interior mutability
/// without locking.
pub trait EventSink {
    /// Receives one notification.
    fn publish(&self, notification: &Notification);
}
