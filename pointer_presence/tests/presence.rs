// Copyright 2025 the Pointer Presence Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `pointer_presence` crate.
//!
//! These exercise the crate-level contract through the queue adapter: hide
//! and reappearance transitions, exactly-once ordered notification, token
//! removal, and one-shot movement-watch bookkeeping.

#![cfg(feature = "queue_adapter")]

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Point;
use pointer_presence::adapters::queue::{ElementId, QueueSource, pump};
use pointer_presence::trace::{TraceRecord, TransitionRecorder};
use pointer_presence::{Presence, PresenceEvent, PresenceTracker};

type Log = Rc<RefCell<Vec<&'static str>>>;

fn tracker() -> PresenceTracker<QueueSource> {
    PresenceTracker::new(QueueSource::new())
}

fn recorded(log: &Log, tag: &'static str) -> impl FnMut() + 'static {
    let log = Rc::clone(log);
    move || log.borrow_mut().push(tag)
}

fn synthesize_move(t: &mut PresenceTracker<QueueSource>) {
    t.source_mut().push_pointer_move(Point::new(1.0, 1.0));
    pump(t);
}

#[test]
fn fresh_tracker_reports_present() {
    let t = tracker();
    assert!(t.is_present());
    assert_eq!(t.presence(), Presence::Present);
    assert!(!t.is_watching_moves());
}

#[test]
fn double_hide_notifies_exactly_once() {
    let log: Log = Rc::default();
    let mut t = tracker();
    t.on_disappear(recorded(&log, "gone"));

    assert!(t.dispatch_disappear());
    assert!(!t.dispatch_disappear());

    assert_eq!(*log.borrow(), vec!["gone"]);
    assert_eq!(t.source().outstanding_move_listeners(), 1);
}

#[test]
fn round_trip_restores_presence_and_notifies_in_order() {
    let log: Log = Rc::default();
    let mut t = tracker();
    t.on_appear(recorded(&log, "a"));
    t.on_appear(recorded(&log, "b"));
    t.on_appear(recorded(&log, "c"));

    t.dispatch_disappear();
    synthesize_move(&mut t);

    assert!(t.is_present());
    assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
}

#[test]
fn repeated_cycles_never_leak_movement_listeners() {
    let mut t = tracker();

    for _ in 0..10 {
        t.dispatch_disappear();
        assert_eq!(t.source().outstanding_move_listeners(), 1);

        // Redundant hide triggers must not stack registrations.
        t.dispatch_disappear();
        assert_eq!(t.source().outstanding_move_listeners(), 1);

        synthesize_move(&mut t);
        assert_eq!(t.source().outstanding_move_listeners(), 0);
    }
}

#[test]
fn unsubscribed_disappear_callback_never_runs() {
    let log: Log = Rc::default();
    let mut t = tracker();
    let sub = t.on_disappear(recorded(&log, "gone"));

    t.unsubscribe(sub);
    t.dispatch_disappear();

    assert!(log.borrow().is_empty());
}

#[test]
fn unsubscribe_resolves_against_both_registries() {
    let log: Log = Rc::default();
    let mut t = tracker();
    let appear_only = t.on_appear(recorded(&log, "back"));

    // The token was only ever registered for appear; removal still works
    // through the one unsubscribe entry point, and repeating it is a no-op.
    t.unsubscribe(appear_only);
    t.unsubscribe(appear_only);

    t.dispatch_disappear();
    synthesize_move(&mut t);
    assert!(log.borrow().is_empty());
}

#[test]
fn subscribers_registered_on_one_side_do_not_fire_on_the_other() {
    let log: Log = Rc::default();
    let mut t = tracker();
    t.on_disappear(recorded(&log, "gone"));
    t.on_appear(recorded(&log, "back"));

    t.dispatch_disappear();
    assert_eq!(*log.borrow(), vec!["gone"]);

    synthesize_move(&mut t);
    assert_eq!(*log.borrow(), vec!["gone", "back"]);
}

#[test]
fn hide_then_move_then_hide_with_unsubscribed_callback() {
    // The scenario walk: logA on disappear, logB on appear, full cycle,
    // then a second hide after logA is unsubscribed.
    let log: Log = Rc::default();
    let mut t = tracker();
    let log_a = t.on_disappear(recorded(&log, "logA"));
    t.on_appear(recorded(&log, "logB"));

    t.dispatch_disappear();
    assert_eq!(*log.borrow(), vec!["logA"]);
    assert_eq!(t.presence(), Presence::Hidden);

    synthesize_move(&mut t);
    assert_eq!(*log.borrow(), vec!["logA", "logB"]);
    assert_eq!(t.presence(), Presence::Present);

    t.unsubscribe(log_a);
    t.dispatch_disappear();
    assert_eq!(*log.borrow(), vec!["logA", "logB"]);
    assert_eq!(t.presence(), Presence::Hidden);
}

#[test]
fn movement_before_any_hide_is_inert() {
    let log: Log = Rc::default();
    let mut t = tracker();
    t.on_appear(recorded(&log, "back"));

    synthesize_move(&mut t);

    assert!(t.is_present());
    assert!(log.borrow().is_empty());
}

#[test]
fn keydown_binding_drives_the_hide_trigger() {
    let log: Log = Rc::default();
    let mut t = tracker();
    t.on_disappear(recorded(&log, "gone"));

    let field = ElementId(5);
    let binding = t.bind_disappear_on_keydown(&field);

    t.source_mut().push_key_down(field);
    pump(&mut t);
    assert_eq!(*log.borrow(), vec!["gone"]);
    assert!(!t.is_present());

    // Unbinding removes only the key listener; the armed movement watch and
    // the subscriptions stay.
    t.unbind_keydown(binding);
    assert_eq!(t.source().outstanding_key_listeners(), 0);
    assert_eq!(t.source().outstanding_move_listeners(), 1);

    synthesize_move(&mut t);
    t.source_mut().push_key_down(field);
    pump(&mut t);

    // No binding, no dispatch.
    assert!(t.is_present());
    assert_eq!(*log.borrow(), vec!["gone"]);
}

#[test]
fn trackers_are_independent() {
    let mut a = tracker();
    let mut b = tracker();

    a.dispatch_disappear();

    assert!(!a.is_present());
    assert!(b.is_present());
    assert_eq!(b.source().outstanding_move_listeners(), 0);

    b.dispatch_disappear();
    synthesize_move(&mut a);
    assert!(a.is_present());
    assert!(!b.is_present());
}

#[test]
fn traced_dispatch_explains_suppression_and_fanout() {
    let mut recorder = TransitionRecorder::new();
    let mut t = tracker();
    t.on_disappear(|| {});
    t.on_disappear(|| {});

    t.dispatch_disappear_with_trace(&mut recorder);
    t.dispatch_disappear_with_trace(&mut recorder);

    assert_eq!(
        recorder.records(),
        &[
            TraceRecord::Transition(PresenceEvent::Disappeared),
            TraceRecord::Notified {
                event: PresenceEvent::Disappeared,
                subscribers: 2
            },
            TraceRecord::WatchArmed,
            TraceRecord::Suppressed(PresenceEvent::Disappeared),
        ]
    );
}
