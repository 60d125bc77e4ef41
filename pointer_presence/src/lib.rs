// Copyright 2025 the Pointer Presence Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=pointer_presence --heading-base-level=0

//! Pointer Presence: pointer presence tracking primitives for UI.
//!
//! This crate tracks whether the pointing-device cursor is currently
//! considered *present* on screen and notifies subscribers on disappearance
//! and reappearance transitions. It is aimed at UI code that changes
//! behavior when the user switches from mouse to keyboard interaction:
//! hiding a custom cursor, pausing hover affordances, and switching them
//! back on the next pointer movement.
//!
//! The pieces are:
//!
//! - [`state::PresenceState`]: the two-state machine (`Present` / `Hidden`)
//!   with guarded, cyclic transitions
//! - [`registry::CallbackRegistry`]: ordered subscriber callbacks keyed by
//!   [`Subscription`] tokens
//! - [`source::EventSource`]: the capability interface the host's input
//!   plumbing implements
//! - [`tracker::PresenceTracker`]: the combined API — subscribe, dispatch,
//!   query, and key-press binding
//! - [`trace`]: additive observability hooks for traced dispatches
//! - [`adapters`]: feature-gated bridges to concrete event delivery
//!
//! ## Design Philosophy
//!
//! The tracker is designed to be:
//!
//! - **Minimal and focused**: one interaction pattern — presence transitions
//!   driven by an explicit hide trigger and the next pointer movement
//! - **Stateful but simple**: one presence value, two ordered registries,
//!   and at most one armed movement watch
//! - **Integration-friendly**: no assumed windowing system; hosts inject an
//!   [`EventSource`] and route native events into the transition entry
//!   points
//! - **Explicitly owned**: no global state; construct as many independent
//!   trackers as needed, which also keeps tests hermetic
//!
//! ## Transition Model
//!
//! The machine starts `Present`. [`PresenceTracker::dispatch_disappear`]
//! (typically bound to keyboard activity) flips it to `Hidden`, notifies
//! every disappear subscriber exactly once in registration order, and arms a
//! single one-shot movement watch. The next movement delivery flips the
//! machine back to `Present`, notifies appear subscribers in order, and
//! releases the watch. Redundant triggers in either direction are suppressed
//! by guards, so repeated hide calls cannot double-notify or stack watches.
//!
//! ## Quick Start
//!
//! With the bundled queue adapter (`queue_adapter` feature, on by default):
//!
//! ```rust
//! # #[cfg(feature = "queue_adapter")]
//! # fn example() {
//! use kurbo::Point;
//! use pointer_presence::PresenceTracker;
//! use pointer_presence::adapters::queue::{ElementId, QueueSource, pump};
//!
//! let mut tracker = PresenceTracker::new(QueueSource::new());
//!
//! tracker.on_disappear(|| { /* hide the custom cursor */ });
//! tracker.on_appear(|| { /* restore it */ });
//!
//! // Route key presses on the editor element into the hide trigger.
//! let editor = ElementId(1);
//! tracker.bind_disappear_on_keydown(&editor);
//!
//! tracker.source_mut().push_key_down(editor);
//! pump(&mut tracker);
//! assert!(!tracker.is_present());
//!
//! tracker.source_mut().push_pointer_move(Point::new(12.0, 34.0));
//! pump(&mut tracker);
//! assert!(tracker.is_present());
//! # }
//! ```
//!
//! ## Using Components Separately
//!
//! The building blocks compose, but each stands alone. The state machine by
//! itself:
//!
//! ```rust
//! use pointer_presence::{PresenceEvent, PresenceState};
//!
//! let mut state = PresenceState::new();
//! assert_eq!(state.hide(), Some(PresenceEvent::Disappeared));
//! assert_eq!(state.hide(), None); // guarded self-loop
//! assert_eq!(state.show(), Some(PresenceEvent::Appeared));
//! ```
//!
//! Subscriptions are identified by tokens rather than callback identity, so
//! removal never depends on comparing closures:
//!
//! ```rust
//! use pointer_presence::{EventSource, PresenceTracker};
//! # #[derive(Default)]
//! # struct Manual { next: u64 }
//! # impl EventSource for Manual {
//! #     type Element = ();
//! #     type ListenerId = u64;
//! #     fn listen_moves(&mut self) -> u64 { self.next += 1; self.next }
//! #     fn listen_keys(&mut self, _element: &()) -> u64 { self.next += 1; self.next }
//! #     fn unlisten(&mut self, _listener: u64) {}
//! # }
//!
//! let mut tracker = PresenceTracker::new(Manual::default());
//! let token = tracker.on_disappear(|| {});
//! tracker.unsubscribe(token);
//! tracker.unsubscribe(token); // idempotent
//! ```
//!
//! ## Observability
//!
//! The tracker does not log. For “why did my subscriber (not) fire?”
//! questions, pass a [`trace::PresenceTrace`] sink to the `_with_trace`
//! dispatch variants; [`trace::TransitionRecorder`] captures the guard
//! decisions, fan-out counts, and watch lifecycle of each dispatch.
//!
//! ## Concurrency
//!
//! Execution is single-threaded and host-loop driven: every mutating
//! operation takes `&mut self`, notification passes run synchronously before
//! the dispatch call returns, and the appear pass runs later as its own
//! delivery. Multi-threaded hosts serialize access with their own lock
//! around the tracker.
//!
//! ## Features
//!
//! - `std` (default): build with the standard library
//! - `libm`: forward Kurbo's `libm` math for `no_std` targets
//! - `queue_adapter` (default): the in-memory [`adapters::queue`] source
//!   (requires the `kurbo` dependency)
//!
//! This crate is `no_std` compatible (with `alloc`) for all modules.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod registry;
pub mod source;
pub mod state;
pub mod trace;
pub mod tracker;

pub use registry::{CallbackRegistry, Subscription};
pub use source::EventSource;
pub use state::{Presence, PresenceEvent, PresenceState};
pub use tracker::{KeyBinding, PresenceTracker};
