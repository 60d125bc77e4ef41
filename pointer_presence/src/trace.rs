// Copyright 2025 the Pointer Presence Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explainability helpers for presence transitions.
//!
//! The tracker intentionally does not log: embedders that need to answer
//! “why did my subscriber (not) fire?” attach a [`PresenceTrace`] sink to the
//! `_with_trace` dispatch variants
//! ([`PresenceTracker::dispatch_disappear_with_trace`](crate::PresenceTracker::dispatch_disappear_with_trace),
//! [`PresenceTracker::pointer_moved_with_trace`](crate::PresenceTracker::pointer_moved_with_trace))
//! and observe guard decisions, notification fan-out, and move-watch
//! lifecycle as they happen.
//!
//! [`TransitionRecorder`] is a small ready-made sink that stores the observed
//! sequence for later inspection; the unit type `()` is the no-op sink used
//! by the plain dispatch methods.

use alloc::vec::Vec;

use crate::state::PresenceEvent;

/// A callback sink observing one presence dispatch.
///
/// All methods default to no-ops so sinks implement only what they care
/// about.
pub trait PresenceTrace {
    /// Called when a transition is committed, before subscribers run.
    fn transition(&mut self, event: PresenceEvent) {
        let _ = event;
    }

    /// Called after a notification pass completes, with the number of
    /// subscribers that fired.
    fn notified(&mut self, event: PresenceEvent, subscribers: usize) {
        let _ = (event, subscribers);
    }

    /// Called when a guard rejects a redundant trigger (hide while hidden,
    /// movement while present).
    fn suppressed(&mut self, event: PresenceEvent) {
        let _ = event;
    }

    /// Called when the one-shot movement watch is armed on the source.
    fn watch_armed(&mut self) {}

    /// Called when the movement watch is released after its first delivery.
    fn watch_released(&mut self) {}
}

/// The no-op sink.
impl PresenceTrace for () {}

/// One observation recorded by [`TransitionRecorder`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TraceRecord {
    /// A committed transition.
    Transition(PresenceEvent),
    /// A completed notification pass and its fan-out.
    Notified {
        /// The transition the pass belonged to.
        event: PresenceEvent,
        /// How many subscribers fired.
        subscribers: usize,
    },
    /// A guard-rejected redundant trigger.
    Suppressed(PresenceEvent),
    /// The movement watch was armed.
    WatchArmed,
    /// The movement watch was released.
    WatchReleased,
}

/// Records the observation sequence of traced dispatches.
#[derive(Debug, Default, Clone)]
pub struct TransitionRecorder {
    records: Vec<TraceRecord>,
}

impl TransitionRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Returns the recorded observations in order.
    #[must_use]
    pub fn records(&self) -> &[TraceRecord] {
        &self.records
    }

    /// Clears all recorded observations.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl PresenceTrace for TransitionRecorder {
    fn transition(&mut self, event: PresenceEvent) {
        self.records.push(TraceRecord::Transition(event));
    }

    fn notified(&mut self, event: PresenceEvent, subscribers: usize) {
        self.records.push(TraceRecord::Notified { event, subscribers });
    }

    fn suppressed(&mut self, event: PresenceEvent) {
        self.records.push(TraceRecord::Suppressed(event));
    }

    fn watch_armed(&mut self) {
        self.records.push(TraceRecord::WatchArmed);
    }

    fn watch_released(&mut self) {
        self.records.push(TraceRecord::WatchReleased);
    }
}
