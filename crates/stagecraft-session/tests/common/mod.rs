//! Shared helpers for session integration tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use chrono::{TimeZone, Utc};
use stagecraft_session::{
    CharacterDescriptor, CharacterRegistry, EventSink, Notification, StageSession,
};
use stagecraft_test_support::{SteppingClock, init_test_tracing};

/// A sink that records every notification it receives.
pub struct RecordingSink(pub Rc<RefCell<Vec<Notification>>>);

impl EventSink for RecordingSink {
    fn publish(&self, notification: &Notification) {
        self.0.borrow_mut().push(notification.clone());
    }
}

/// The registry all integration tests share.
pub fn registry() -> CharacterRegistry {
    CharacterRegistry::new()
        .with(
            "mentor".into(),
            CharacterDescriptor {
                display_name: String::from("Maya"),
                sprite_key: String::from("maya"),
                role: Some(String::from("Your mentor")),
            },
        )
        .with(
            "founder".into(),
            CharacterDescriptor {
                display_name: String::from("Sam"),
                sprite_key: String::from("sam"),
                role: None,
            },
        )
}

/// Builds a session on a stepping clock with a recording sink attached.
pub fn build_session() -> (StageSession, SteppingClock, Rc<RefCell<Vec<Notification>>>) {
    init_test_tracing();
    let clock = SteppingClock::starting_at(Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap());
    let mut session = StageSession::new(Arc::new(clock.clone()), registry());
    let log = Rc::new(RefCell::new(Vec::new()));
    session.subscribe(Box::new(RecordingSink(Rc::clone(&log))));
    (session, clock, log)
}
