// Copyright 2025 the Pointer Presence Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event source and routing for serialized event streams.
//!
//! [`QueueSource`] implements [`EventSource`] over a plain event queue:
//! hosts (or tests) push [`RawEvent`]s, and [`pump`] drains them in arrival
//! order, routing each to the tracker entry point whose registration it
//! matches. A pointer movement only reaches the tracker while its one-shot
//! movement watch is registered; a key press only triggers a disappear
//! dispatch when some binding targets its element.
//!
//! The source also exposes its registration bookkeeping
//! ([`QueueSource::outstanding_move_listeners`],
//! [`QueueSource::outstanding_key_listeners`]), which makes the tracker's
//! no-leaked-listeners guarantee directly observable.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use pointer_presence::PresenceTracker;
//! use pointer_presence::adapters::queue::{ElementId, QueueSource, pump};
//!
//! let mut tracker = PresenceTracker::new(QueueSource::new());
//! let editor = ElementId(1);
//! tracker.bind_disappear_on_keydown(&editor);
//!
//! // Typing retires the pointer; the next movement restores it.
//! tracker.source_mut().push_key_down(editor);
//! pump(&mut tracker);
//! assert!(!tracker.is_present());
//!
//! tracker.source_mut().push_pointer_move(Point::new(4.0, 2.0));
//! pump(&mut tracker);
//! assert!(tracker.is_present());
//! ```

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use kurbo::Point;

use crate::source::EventSource;
use crate::tracker::PresenceTracker;

/// Element key scoping key-press listeners in a [`QueueSource`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ElementId(pub u32);

/// Identifier for one active [`QueueSource`] registration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Raw input events accepted by [`QueueSource`].
///
/// Movement positions are carried for boundary fidelity; presence tracking
/// ignores magnitude and velocity.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RawEvent {
    /// The pointer moved to `pos`.
    PointerMove {
        /// Pointer position in host coordinates.
        pos: Point,
    },
    /// A key was pressed while `element` had key focus.
    KeyDown {
        /// The element the key event targets.
        element: ElementId,
    },
}

/// An [`EventSource`] over an in-memory event queue.
#[derive(Debug, Default)]
pub struct QueueSource {
    queue: VecDeque<RawEvent>,
    move_listeners: Vec<ListenerId>,
    key_listeners: Vec<(ListenerId, ElementId)>,
    next: u64,
}

impl QueueSource {
    /// Creates an empty source with no pending events or registrations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues `event` for the next [`pump`].
    pub fn push(&mut self, event: RawEvent) {
        self.queue.push_back(event);
    }

    /// Enqueues a pointer movement to `pos`.
    pub fn push_pointer_move(&mut self, pos: Point) {
        self.push(RawEvent::PointerMove { pos });
    }

    /// Enqueues a key press targeting `element`.
    pub fn push_key_down(&mut self, element: ElementId) {
        self.push(RawEvent::KeyDown { element });
    }

    /// Dequeues the oldest pending event, if any.
    pub fn pop(&mut self) -> Option<RawEvent> {
        self.queue.pop_front()
    }

    /// Returns the number of events waiting to be pumped.
    #[must_use]
    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }

    /// Returns the number of live movement registrations.
    #[must_use]
    pub fn outstanding_move_listeners(&self) -> usize {
        self.move_listeners.len()
    }

    /// Returns the number of live key registrations.
    #[must_use]
    pub fn outstanding_key_listeners(&self) -> usize {
        self.key_listeners.len()
    }

    /// Returns `true` if any key registration targets `element`.
    #[must_use]
    pub fn is_key_bound(&self, element: ElementId) -> bool {
        self.key_listeners.iter().any(|&(_, el)| el == element)
    }

    fn alloc(&mut self) -> ListenerId {
        let id = ListenerId(self.next);
        self.next += 1;
        id
    }
}

impl EventSource for QueueSource {
    type Element = ElementId;
    type ListenerId = ListenerId;

    fn listen_moves(&mut self) -> ListenerId {
        let id = self.alloc();
        self.move_listeners.push(id);
        id
    }

    fn listen_keys(&mut self, element: &ElementId) -> ListenerId {
        let id = self.alloc();
        self.key_listeners.push((id, *element));
        id
    }

    fn unlisten(&mut self, listener: ListenerId) {
        self.move_listeners.retain(|&id| id != listener);
        self.key_listeners.retain(|&(id, _)| id != listener);
    }
}

/// Drains the tracker's queue and routes events to matching registrations.
///
/// Events are processed in arrival order. A [`RawEvent::PointerMove`] invokes
/// [`PresenceTracker::pointer_moved`] only while a movement registration is
/// outstanding; a [`RawEvent::KeyDown`] invokes
/// [`PresenceTracker::dispatch_disappear`] only when a key binding targets
/// its element. Returns the number of events that reached a registration.
pub fn pump(tracker: &mut PresenceTracker<QueueSource>) -> usize {
    let mut delivered = 0;
    while let Some(event) = tracker.source_mut().pop() {
        match event {
            RawEvent::PointerMove { .. } => {
                if tracker.source().outstanding_move_listeners() > 0 {
                    tracker.pointer_moved();
                    delivered += 1;
                }
            }
            RawEvent::KeyDown { element } => {
                if tracker.source().is_key_bound(element) {
                    tracker.dispatch_disappear();
                    delivered += 1;
                }
            }
        }
    }
    delivered
}
