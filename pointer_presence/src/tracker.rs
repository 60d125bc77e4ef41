// Copyright 2025 the Pointer Presence Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presence tracker: the presence machine, callback registries, and an
//! injected event source combined behind one API.
//!
//! ## Usage
//!
//! 1) Construct a [`PresenceTracker`] around the host's [`EventSource`].
//! 2) Register interest with [`PresenceTracker::on_disappear`] /
//!    [`PresenceTracker::on_appear`]; keep the returned [`Subscription`]
//!    tokens for removal.
//! 3) Call [`PresenceTracker::dispatch_disappear`] when keyboard interaction
//!    retires the pointer (or wire it up with
//!    [`PresenceTracker::bind_disappear_on_keydown`]).
//! 4) Have the host adapter call [`PresenceTracker::pointer_moved`] when the
//!    armed movement registration fires; presence is restored and appear
//!    subscribers run.
//!
//! ## Minimal example
//!
//! ```
//! use pointer_presence::{EventSource, PresenceTracker};
//!
//! // A bare-bones source for hosts that route events by hand.
//! #[derive(Default)]
//! struct Manual {
//!     next: u64,
//! }
//!
//! impl EventSource for Manual {
//!     type Element = ();
//!     type ListenerId = u64;
//!
//!     fn listen_moves(&mut self) -> u64 {
//!         self.next += 1;
//!         self.next
//!     }
//!
//!     fn listen_keys(&mut self, _element: &()) -> u64 {
//!         self.next += 1;
//!         self.next
//!     }
//!
//!     fn unlisten(&mut self, _listener: u64) {}
//! }
//!
//! let mut tracker = PresenceTracker::new(Manual::default());
//! assert!(tracker.is_present());
//!
//! tracker.on_disappear(|| { /* hide the custom cursor */ });
//! tracker.on_appear(|| { /* show it again */ });
//!
//! // Keyboard activity retires the pointer and arms the movement watch.
//! assert!(tracker.dispatch_disappear());
//! assert!(!tracker.is_present());
//! assert!(tracker.is_watching_moves());
//!
//! // The next movement delivery restores presence and releases the watch.
//! assert!(tracker.pointer_moved());
//! assert!(tracker.is_present());
//! assert!(!tracker.is_watching_moves());
//! ```

use alloc::vec::Vec;
use core::fmt;

use crate::registry::{CallbackRegistry, Subscription};
use crate::source::EventSource;
use crate::state::{Presence, PresenceEvent, PresenceState};
use crate::trace::PresenceTrace;

/// Token identifying one key-press binding made through
/// [`PresenceTracker::bind_disappear_on_keydown`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyBinding(u64);

/// Tracks pointer presence and notifies subscribers on transitions.
///
/// The tracker owns its state and registries; hosts construct as many
/// independent trackers as they need and inject the event source explicitly,
/// which also makes the component straightforward to exercise in tests.
///
/// Transition sequencing, per dispatch:
///
/// - A hide trigger while already hidden is a no-op: no duplicate
///   notifications, no extra movement registration.
/// - `Present → Hidden` notifies every disappear subscriber exactly once, in
///   registration order, then arms a single movement watch on the source.
/// - `Hidden → Present` (first movement delivery) notifies every appear
///   subscriber in order, then releases the watch. At most one watch is
///   outstanding at any time.
///
/// Subscriber panics are not caught; they unwind to whoever triggered the
/// dispatch and skip the remainder of that notification pass.
pub struct PresenceTracker<S: EventSource> {
    source: S,
    state: PresenceState,
    disappear: CallbackRegistry,
    appear: CallbackRegistry,
    move_watch: Option<S::ListenerId>,
    key_bindings: Vec<(KeyBinding, S::ListenerId)>,
    next_subscription: u64,
    next_binding: u64,
}

impl<S: EventSource> PresenceTracker<S> {
    /// Creates a tracker in the [`Presence::Present`] state around the
    /// injected source.
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: PresenceState::new(),
            disappear: CallbackRegistry::new(),
            appear: CallbackRegistry::new(),
            move_watch: None,
            key_bindings: Vec::new(),
            next_subscription: 0,
            next_binding: 0,
        }
    }

    /// Returns a shared reference to the injected source.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns an exclusive reference to the injected source.
    ///
    /// Host adapters use this to feed or drain the source between dispatches.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Returns the current presence value.
    #[must_use]
    pub fn presence(&self) -> Presence {
        self.state.current()
    }

    /// Returns `true` iff the pointer is currently present. Pure query.
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.state.is_present()
    }

    /// Returns `true` while the one-shot movement watch is armed.
    ///
    /// The watch is armed by a successful [`dispatch_disappear`](Self::dispatch_disappear)
    /// and released by the next [`pointer_moved`](Self::pointer_moved); it is
    /// never armed twice.
    #[must_use]
    pub fn is_watching_moves(&self) -> bool {
        self.move_watch.is_some()
    }

    /// Returns the number of disappear subscribers.
    #[must_use]
    pub fn disappear_subscriber_count(&self) -> usize {
        self.disappear.len()
    }

    /// Returns the number of appear subscribers.
    #[must_use]
    pub fn appear_subscriber_count(&self) -> usize {
        self.appear.len()
    }

    /// Returns the number of active key-press bindings.
    #[must_use]
    pub fn key_binding_count(&self) -> usize {
        self.key_bindings.len()
    }

    /// Registers `callback` for disappearance transitions.
    ///
    /// Callbacks fire in registration order. The returned token removes this
    /// registration via [`unsubscribe`](Self::unsubscribe).
    pub fn on_disappear(&mut self, callback: impl FnMut() + 'static) -> Subscription {
        let id = self.alloc_subscription();
        self.disappear.register(id, callback);
        id
    }

    /// Registers `callback` for reappearance transitions.
    ///
    /// Symmetric to [`on_disappear`](Self::on_disappear), against the appear
    /// registry.
    pub fn on_appear(&mut self, callback: impl FnMut() + 'static) -> Subscription {
        let id = self.alloc_subscription();
        self.appear.register(id, callback);
        id
    }

    /// Removes `subscription` from both registries.
    ///
    /// Unknown or already-removed tokens are a no-op, not an error. Removal
    /// takes effect for the next dispatch.
    pub fn unsubscribe(&mut self, subscription: Subscription) {
        self.disappear.remove(subscription);
        self.appear.remove(subscription);
    }

    /// Marks the pointer as disappeared and notifies disappear subscribers.
    ///
    /// The sole hide entry point. Synchronously, in order: guard (a no-op
    /// returning `false` when already hidden), flip to [`Presence::Hidden`],
    /// notify every disappear subscriber in registration order, then arm the
    /// one-shot movement watch on the source. Returns `true` when a
    /// transition happened.
    pub fn dispatch_disappear(&mut self) -> bool {
        self.dispatch_disappear_with_trace(&mut ())
    }

    /// [`dispatch_disappear`](Self::dispatch_disappear) with a trace sink
    /// observing guard decisions, fan-out, and watch arming.
    pub fn dispatch_disappear_with_trace(&mut self, trace: &mut impl PresenceTrace) -> bool {
        let Some(event) = self.state.hide() else {
            trace.suppressed(PresenceEvent::Disappeared);
            return false;
        };
        trace.transition(event);

        self.disappear.notify_all();
        trace.notified(event, self.disappear.len());

        // The hide guard already rejected re-entry while hidden, so no watch
        // can be outstanding here.
        debug_assert!(
            self.move_watch.is_none(),
            "movement watch armed while present"
        );
        self.move_watch = Some(self.source.listen_moves());
        trace.watch_armed();
        true
    }

    /// Restores presence on the first movement delivery after hiding.
    ///
    /// Invoked by the host adapter when the armed movement registration
    /// fires. Guard (a no-op returning `false` while present), flip to
    /// [`Presence::Present`], notify every appear subscriber in registration
    /// order, then release the movement watch. Returns `true` when a
    /// transition happened.
    pub fn pointer_moved(&mut self) -> bool {
        self.pointer_moved_with_trace(&mut ())
    }

    /// [`pointer_moved`](Self::pointer_moved) with a trace sink.
    pub fn pointer_moved_with_trace(&mut self, trace: &mut impl PresenceTrace) -> bool {
        let Some(event) = self.state.show() else {
            trace.suppressed(PresenceEvent::Appeared);
            return false;
        };
        trace.transition(event);

        self.appear.notify_all();
        trace.notified(event, self.appear.len());

        if let Some(listener) = self.move_watch.take() {
            self.source.unlisten(listener);
            trace.watch_released();
        }
        true
    }

    /// Binds [`dispatch_disappear`](Self::dispatch_disappear) to key presses
    /// on `element`.
    ///
    /// Registers a persistent key listener through the source. The returned
    /// token removes exactly that listener via
    /// [`unbind_keydown`](Self::unbind_keydown); subscriptions and the
    /// movement watch are unaffected by either operation.
    pub fn bind_disappear_on_keydown(&mut self, element: &S::Element) -> KeyBinding {
        let listener = self.source.listen_keys(element);
        let binding = KeyBinding(self.next_binding);
        self.next_binding += 1;
        self.key_bindings.push((binding, listener));
        binding
    }

    /// Removes the key listener registered under `binding`.
    ///
    /// Unknown or already-removed bindings are a no-op.
    pub fn unbind_keydown(&mut self, binding: KeyBinding) {
        if let Some(index) = self.key_bindings.iter().position(|(b, _)| *b == binding) {
            let (_, listener) = self.key_bindings.remove(index);
            self.source.unlisten(listener);
        }
    }

    fn alloc_subscription(&mut self) -> Subscription {
        // One id namespace across both registries; ids are never reused, so
        // stale tokens stay inert.
        let id = Subscription::from_raw(self.next_subscription);
        self.next_subscription += 1;
        id
    }
}

impl<S: EventSource> fmt::Debug for PresenceTracker<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PresenceTracker")
            .field("state", &self.state)
            .field("disappear_subscribers", &self.disappear.len())
            .field("appear_subscribers", &self.appear.len())
            .field("watching_moves", &self.move_watch.is_some())
            .field("key_bindings", &self.key_bindings.len())
            .finish_non_exhaustive()
    }
}
